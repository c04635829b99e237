//! Game session: a sequence of rounds sharing one score.
//!
//! ```text
//! title -> instructions -> round -> (won) Continue? --yes--> round ...
//!                            |                 \--no---> Game over.
//!                            \--(lost)--------------------> Game over.
//! ```
//!
//! A closed console at any prompt ends the game the same way.

use std::collections::HashSet;

use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::core::{ComponentSet, GuessReport, Round, Scoreboard};
use crate::input::{
    is_affirmative, parse_letter, ChoiceList, Console, Conversation, InputError, Validator,
};
use crate::types::{Level, RoundState, DEFAULT_PENALTY, DEFAULT_REWARD, MAX_DISPLAY_WIDTH};
use crate::words::WordLists;

pub const TITLE: &str = include_str!("../assets/title.txt");
pub const INSTRUCTIONS: &str = include_str!("../assets/instructions.txt");

const INVALID_GUESS: &str = "Invalid guess. Please input a letter.";
const ALREADY_GUESSED: &str = "You have already guessed this letter. Please try again.";

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Points per revealed letter, before the level coefficient
    pub reward: u32,
    /// Points lost per incorrect guess, before the level coefficient
    pub penalty: u32,
    /// RNG seed for word selection; OS entropy when `None`
    pub seed: Option<u64>,
    /// Play every round at this level instead of asking
    pub level: Option<Level>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reward: DEFAULT_REWARD,
            penalty: DEFAULT_PENALTY,
            seed: None,
            level: None,
        }
    }
}

pub struct Game<'a, C> {
    conversation: Conversation<C>,
    components: &'a ComponentSet,
    words: &'a WordLists,
    scoreboard: Scoreboard,
    level: Option<Level>,
    used_words: HashSet<String>,
    rng: StdRng,
    rounds: usize,
    ended: bool,
}

impl<'a, C: Console> Game<'a, C> {
    pub fn new(
        console: C,
        components: &'a ComponentSet,
        words: &'a WordLists,
        config: GameConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            conversation: Conversation::new(console),
            components,
            words,
            scoreboard: Scoreboard::new(config.reward, config.penalty),
            level: config.level,
            used_words: HashSet::new(),
            rng,
            rounds: 0,
            ended: false,
        }
    }

    pub fn points(&self) -> u64 {
        self.scoreboard.points()
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Rounds started so far
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Words already played this session, lowercase
    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    pub fn console(&self) -> &C {
        self.conversation.console()
    }

    pub fn into_console(self) -> C {
        self.conversation.into_console()
    }

    /// Run the whole session.
    ///
    /// Returns once the game is over. A closed console is not an error: the
    /// game is ended and the final score shown.
    pub fn start(&mut self) -> Result<()> {
        match self.run() {
            Ok(()) => Ok(()),
            Err(err) if is_closed(&err) => {
                info!(rounds = self.rounds, "input closed, ending game");
                if !self.ended {
                    self.end()?;
                }
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn run(&mut self) -> Result<()> {
        self.conversation.answer(TITLE)?;
        self.conversation.answer(INSTRUCTIONS)?;

        self.play_round()?;
        while !self.ended && self.prompt_for_continue()? {
            self.play_round()?;
        }

        if !self.ended {
            self.end()?;
        }
        Ok(())
    }

    /// Mark the game over and show the final score.
    pub fn end(&mut self) -> Result<()> {
        self.ended = true;
        info!(points = self.points(), rounds = self.rounds, "game over");

        let banner = format!("{:-^width$}", "Game over.", width = MAX_DISPLAY_WIDTH);
        self.conversation.answer(&banner)?;
        self.output_points()
    }

    /// Play one word from level choice to win or loss.
    ///
    /// A loss ends the game.
    pub fn play_round(&mut self) -> Result<RoundState> {
        let level = match self.level {
            Some(level) => level,
            None => self.prompt_for_level()?,
        };
        let coefficient = self.words.coefficient_for_level(level);
        let word = self
            .words
            .word_for_level(level, &mut self.rng, &self.used_words)
            .ok_or_else(|| anyhow!("no words available for level {level}"))?
            .to_string();
        self.used_words.insert(word.clone());
        self.rounds += 1;

        let mut round = Round::new(self.components, &word, coefficient)
            .with_context(|| format!("failed to start a round at level {level}"))?;
        info!(
            level = level.as_str(),
            coefficient,
            letters = round.word().len(),
            "round started"
        );

        while !round.is_over() {
            self.play_turn(&mut round)?;
        }

        let state = round.state();
        info!(state = state.as_str(), points = self.points(), "round over");
        if state == RoundState::Lost {
            self.conversation.frame(&round.render_canvas())?;
            self.conversation
                .answer(&format!("The word was \"{}\".", round.word()))?;
            self.end()?;
        } else {
            self.output_word_state(&round)?;
        }
        Ok(state)
    }

    fn play_turn(&mut self, round: &mut Round) -> Result<()> {
        self.conversation.frame(&round.render_canvas())?;
        self.output_word_state(round)?;

        let guess = self.prompt_for_guess(round)?;
        let report = round.guess(guess)?;
        debug!(?report, "turn played");

        match report {
            GuessReport::Hit {
                letter,
                occurrences,
            } => {
                let notice = if occurrences == 1 {
                    format!("There is 1 \"{letter}\"!")
                } else {
                    format!("There are {occurrences} \"{letter}\"s!")
                };
                self.conversation.answer(&notice)?;
                self.scoreboard
                    .reward_correct_guess(occurrences, round.coefficient());
            }
            GuessReport::Miss { .. } => {
                self.conversation.answer("Incorrect guess.")?;
                self.scoreboard.penalize_incorrect_guess(round.coefficient());
            }
        }
        self.output_points()
    }

    fn prompt_for_guess(&mut self, round: &Round) -> Result<char> {
        let validators = [
            Validator::new(|response, _| parse_letter(response).is_some(), INVALID_GUESS),
            Validator::new(
                |response, _| parse_letter(response).is_some_and(|letter| !round.has_guessed(letter)),
                ALREADY_GUESSED,
            ),
        ];

        let response = self.conversation.ask("Your guess:", None, &validators)?;
        parse_letter(&response).ok_or_else(|| anyhow!("accepted guess {response:?} is not a letter"))
    }

    fn prompt_for_level(&mut self) -> Result<Level> {
        let menu = self.level_menu();
        let response = self.conversation.ask("Choose a level:", Some(&menu), &[])?;
        menu.get(&response)
            .and_then(|choice| choice.value())
            .and_then(Level::from_str)
            .ok_or_else(|| anyhow!("accepted level {response:?} is not in the menu"))
    }

    /// `[E] Easy (90 words)  [M] Medium (96 words)  ...`
    fn level_menu(&self) -> ChoiceList {
        Level::ALL
            .into_iter()
            .fold(ChoiceList::new(), |menu, level| {
                let title = level.title();
                let description = format!("{title} ({} words)", self.words.get(level).len());
                menu.with_choice(&title[..1], &description, [title], Some(level.as_str()))
            })
    }

    fn prompt_for_continue(&mut self) -> Result<bool> {
        let menu = ChoiceList::confirmation();
        let response = self.conversation.ask("Continue?", Some(&menu), &[])?;
        Ok(is_affirmative(&response))
    }

    fn output_word_state(&mut self, round: &Round) -> Result<()> {
        self.conversation
            .answer(&format!("Word: {}", round.word_display()))?;
        Ok(())
    }

    fn output_points(&mut self) -> Result<()> {
        self.conversation
            .answer(&format!("Points: {}", self.points()))?;
        Ok(())
    }
}

fn is_closed(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<InputError>(), Some(InputError::Closed))
}
