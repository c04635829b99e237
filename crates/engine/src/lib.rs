//! Engine module - the game session driving rounds over a console.
//!
//! The engine owns everything outside a single round: the title and
//! instructions, level selection, word choice without repeats, the score, and
//! the continue prompt. It talks to the player only through
//! [`Console`](crate::input::Console), so the same session runs against a
//! terminal or a scripted test console.

pub mod game;

pub use tui_hangman_core as core;
pub use tui_hangman_input as input;
pub use tui_hangman_types as types;
pub use tui_hangman_words as words;

pub use game::{Game, GameConfig, INSTRUCTIONS, TITLE};
