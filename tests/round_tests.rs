//! Round tests - word masking and the lives state machine

use tui_hangman::core::{ComponentSet, GuessError, GuessReport, Round, Scoreboard, WordState};
use tui_hangman::types::{RoundState, LIVES};

#[test]
fn test_word_apple_walkthrough() {
    let mut word = WordState::new("APPLE").unwrap();

    assert_eq!(word.guess('P'), 2);
    assert_eq!(word.current_display(), "_ P P _ _");
    assert!(!word.is_fully_revealed());

    assert_eq!(word.guess('Z'), 0);
    assert_eq!(word.current_display(), "_ P P _ _");

    for letter in ['A', 'L', 'E'] {
        assert!(word.guess(letter) > 0);
    }
    assert!(word.is_fully_revealed());
    assert_eq!(word.current_display(), "A P P L E");
}

#[test]
fn test_six_misses_lose_the_round() {
    let components = ComponentSet::load().unwrap();
    let mut round = Round::new(&components, "cat", 1).unwrap();
    assert_eq!(round.lives_left(), LIVES);

    for (i, letter) in ['B', 'D', 'E', 'F', 'G', 'H'].into_iter().enumerate() {
        assert_eq!(round.state(), RoundState::InProgress);
        let report = round.guess(letter).unwrap();
        assert_eq!(
            report,
            GuessReport::Miss {
                letter,
                lives_left: LIVES - i - 1
            }
        );
    }

    assert_eq!(round.lives_left(), 0);
    assert_eq!(round.state(), RoundState::Lost);
    // gallows + six body parts + loss overlay
    assert_eq!(round.composite().len(), 1 + LIVES + 1);
    assert!(round.render_canvas().contains("(x_x)"));
    assert_eq!(round.guess('C'), Err(GuessError::RoundOver));
}

#[test]
fn test_cat_is_won_with_all_lives() {
    let components = ComponentSet::load().unwrap();
    let mut round = Round::new(&components, "cat", 1).unwrap();

    for letter in ['c', 'a', 't'] {
        assert!(round.guess(letter).unwrap().is_hit());
    }

    assert_eq!(round.state(), RoundState::Won);
    assert_eq!(round.lives_left(), LIVES);
    assert_eq!(round.composite().len(), 1);
    assert_eq!(round.word_display(), "C A T");
}

#[test]
fn test_each_miss_draws_one_more_part() {
    let components = ComponentSet::load().unwrap();
    let mut round = Round::new(&components, "apple", 2).unwrap();
    let mut previous = round.render_canvas();

    for letter in ['q', 'w', 'r', 't', 'y'] {
        round.guess(letter).unwrap();
        let canvas = round.render_canvas();
        assert_ne!(canvas, previous, "a miss should change the drawing");
        previous = canvas;
    }
    assert_eq!(round.composite().len(), 6);
    assert_eq!(round.state(), RoundState::InProgress);
}

#[test]
fn test_scoring_a_round() {
    let components = ComponentSet::load().unwrap();
    let mut round = Round::new(&components, "hello", 3).unwrap();
    let mut scoreboard = Scoreboard::default();

    for letter in ['z', 'l', 'h'] {
        match round.guess(letter).unwrap() {
            GuessReport::Hit { occurrences, .. } => {
                scoreboard.reward_correct_guess(occurrences, round.coefficient());
            }
            GuessReport::Miss { .. } => {
                scoreboard.penalize_incorrect_guess(round.coefficient());
            }
        }
    }

    // miss at 0 stays 0, then 2*2*3 + 2*1*3
    assert_eq!(scoreboard.points(), 18);
}
