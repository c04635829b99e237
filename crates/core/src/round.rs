//! Round module - the per-word state machine
//!
//! A round starts `InProgress` with the gallows as the only visible layer and
//! one body part in reserve per life. Each incorrect guess moves exactly one
//! body part from the reserve onto the canvas; losing the last one also adds
//! the loss overlay. Termination is checked loss first, then win.
//!
//! The round is pure state: prompting, notices and scoring belong to the
//! caller, which feeds it one validated letter at a time.

use std::collections::{BTreeSet, VecDeque};

use thiserror::Error;
use tracing::debug;

use crate::components::ComponentSet;
use crate::composite::Composite;
use crate::grid::{check_shape, Grid, ShapeError};
use crate::types::RoundState;
use crate::word::{WordError, WordState};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("the scoring coefficient must be at least 1")]
    ZeroCoefficient,

    #[error("a round needs at least one life in reserve")]
    NoLives,

    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Why a guess was refused. The round is left unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("the round is already over")]
    RoundOver,

    #[error("{0:?} is not a letter")]
    NotALetter(char),

    #[error("{0} has already been guessed")]
    AlreadyGuessed(char),
}

/// What a single accepted guess did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessReport {
    /// The letter occurs `occurrences` times and is now revealed
    Hit { letter: char, occurrences: usize },
    /// The letter is absent; one body part was drawn
    Miss { letter: char, lives_left: usize },
}

impl GuessReport {
    pub fn letter(&self) -> char {
        match self {
            GuessReport::Hit { letter, .. } | GuessReport::Miss { letter, .. } => *letter,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, GuessReport::Hit { .. })
    }
}

/// One word's worth of play.
#[derive(Debug, Clone)]
pub struct Round {
    composite: Composite,
    /// Body parts not yet drawn, next one at the front
    reserve: VecDeque<Grid>,
    loss_overlay: Grid,
    word: WordState,
    guessed: BTreeSet<char>,
    coefficient: u32,
    state: RoundState,
}

impl Round {
    /// Start a round with the standard gallows, body parts and loss overlay.
    ///
    /// The layers are cloned out of `components`, which stays untouched.
    ///
    /// ```
    /// use tui_hangman_core::{ComponentSet, Round};
    /// use tui_hangman_types::RoundState;
    ///
    /// let components = ComponentSet::load().unwrap();
    /// let mut round = Round::new(&components, "cat", 1).unwrap();
    /// for letter in ['c', 'a', 't'] {
    ///     round.guess(letter).unwrap();
    /// }
    /// assert_eq!(round.state(), RoundState::Won);
    /// assert_eq!(round.lives_left(), 6);
    /// ```
    pub fn new(components: &ComponentSet, word: &str, coefficient: u32) -> Result<Self, RoundError> {
        Self::with_layers(
            components.gallows().clone(),
            components.body_parts().cloned().collect(),
            components.you_lost().clone(),
            word,
            coefficient,
        )
    }

    /// Start a round from explicit layers.
    ///
    /// Every layer must share the base's shape and the reserve must hold at
    /// least one layer.
    pub fn with_layers(
        base: Grid,
        reserve: Vec<Grid>,
        loss_overlay: Grid,
        word: &str,
        coefficient: u32,
    ) -> Result<Self, RoundError> {
        if coefficient == 0 {
            return Err(RoundError::ZeroCoefficient);
        }
        if reserve.is_empty() {
            return Err(RoundError::NoLives);
        }

        let shape = base.shape();
        for layer in reserve.iter().chain(std::iter::once(&loss_overlay)) {
            check_shape(shape, layer.shape())?;
        }

        let word = WordState::new(word)?;
        debug!(
            letters = word.len(),
            lives = reserve.len(),
            coefficient,
            "round started"
        );

        Ok(Self {
            composite: Composite::from_grid(base),
            reserve: reserve.into(),
            loss_overlay,
            word,
            guessed: BTreeSet::new(),
            coefficient,
            state: RoundState::InProgress,
        })
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Body parts still in reserve
    pub fn lives_left(&self) -> usize {
        self.reserve.len()
    }

    pub fn coefficient(&self) -> u32 {
        self.coefficient
    }

    pub fn word(&self) -> &WordState {
        &self.word
    }

    pub fn composite(&self) -> &Composite {
        &self.composite
    }

    /// Letters guessed so far, uppercased
    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    /// The canvas as text, every layer drawn so far merged
    pub fn render_canvas(&self) -> String {
        self.composite.render()
    }

    /// The word with hidden letters masked
    pub fn word_display(&self) -> String {
        self.word.current_display()
    }

    /// Apply one guess.
    ///
    /// The letter is recorded, then either revealed (hit) or charged one life
    /// (miss). After the guess the round is re-evaluated: an empty reserve is
    /// a loss, a fully revealed word is a win.
    pub fn guess(&mut self, guess: char) -> Result<GuessReport, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::RoundOver);
        }
        if !guess.is_ascii_alphabetic() {
            return Err(GuessError::NotALetter(guess));
        }

        let letter = guess.to_ascii_uppercase();
        if !self.guessed.insert(letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        let occurrences = self.word.guess(letter);
        let report = if occurrences == 0 {
            self.lose_life();
            GuessReport::Miss {
                letter,
                lives_left: self.lives_left(),
            }
        } else {
            GuessReport::Hit {
                letter,
                occurrences,
            }
        };

        self.state = self.evaluate();
        debug!(?report, state = self.state.as_str(), "guess applied");
        Ok(report)
    }

    /// Draw the next body part; on the last one add the loss overlay too.
    fn lose_life(&mut self) {
        let Some(part) = self.reserve.pop_front() else {
            return;
        };

        // Shapes were checked in `with_layers`.
        self.composite.push_checked(part);
        if self.reserve.is_empty() {
            self.composite.push_checked(self.loss_overlay.clone());
        }
    }

    fn evaluate(&self) -> RoundState {
        if self.reserve.is_empty() {
            RoundState::Lost
        } else if self.word.is_fully_revealed() {
            RoundState::Won
        } else {
            RoundState::InProgress
        }
    }
}
