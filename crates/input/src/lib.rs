//! Line-based input module (engine-facing).
//!
//! This module is independent of any terminal library. It defines the
//! [`Console`] the game talks through, the ask-until-valid [`Conversation`]
//! loop, choice menus, and the mapping of typed responses to game inputs.

pub mod choices;
pub mod console;
pub mod conversation;
pub mod map;

pub use tui_hangman_types as types;

pub use choices::{Choice, ChoiceList};
pub use console::{Console, InputError, ScriptedConsole};
pub use conversation::{Conversation, Validator, INVALID_CHOICE, INVALID_RESPONSE};
pub use map::{is_affirmative, parse_letter};
