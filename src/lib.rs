//! TUI Hangman (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so callers (and the
//! integration tests) can use `tui_hangman::{core,engine,input,term,types,words}`.

pub use tui_hangman_core as core;
pub use tui_hangman_engine as engine;
pub use tui_hangman_input as input;
pub use tui_hangman_term as term;
pub use tui_hangman_types as types;
pub use tui_hangman_words as words;
