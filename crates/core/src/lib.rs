//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the layered renderer, the word mask, scoring and the
//! round state machine. It has **zero dependencies** on terminals or input
//! handling, making it:
//!
//! - **Deterministic**: the same guesses always produce the same frames
//! - **Testable**: every rule is covered without a terminal
//! - **Portable**: the rendered frame is plain text
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size character grids with transparent merge
//! - [`composite`]: ordered stacks of same-shaped grids, flattened on demand
//! - [`word`]: the secret word and its reveal mask
//! - [`round`]: the per-word state machine (lives, guesses, win/loss)
//! - [`scoring`]: rewards and penalties scaled by the level coefficient
//! - [`components`]: the embedded ASCII-art layers
//!
//! # Rendering Rules
//!
//! - **Transparency**: whitespace cells never overwrite the layer below
//! - **Order**: layers merge in insertion order, the first one is the base
//! - **Shape**: every layer of a composite has the composite's exact shape
//!
//! # Example
//!
//! ```
//! use tui_hangman_core::{ComponentSet, Round};
//! use tui_hangman_types::RoundState;
//!
//! let components = ComponentSet::load().unwrap();
//! let mut round = Round::new(&components, "apple", 2).unwrap();
//!
//! round.guess('p').unwrap();
//! assert_eq!(round.word_display(), "_ P P _ _");
//!
//! round.guess('z').unwrap();
//! assert_eq!(round.lives_left(), 5);
//! assert_eq!(round.state(), RoundState::InProgress);
//! ```

pub mod components;
pub mod composite;
pub mod grid;
pub mod round;
pub mod scoring;
pub mod word;

pub use tui_hangman_types as types;

// Re-export commonly used types for convenience
pub use components::{Component, ComponentSet};
pub use composite::Composite;
pub use grid::{Cell, Grid, Shape, ShapeError};
pub use round::{GuessError, GuessReport, Round, RoundError};
pub use scoring::{calculate_penalty, calculate_reward, Scoreboard};
pub use word::{WordError, WordState};
