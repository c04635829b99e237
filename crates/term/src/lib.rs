//! Terminal module.
//!
//! A line-oriented [`Console`](crate::input::Console) over stdin/stdout. The
//! hangman canvas is encoded into crossterm commands and flushed in one write;
//! everything else is printed as plain text. Interactive input is read key by
//! key so Ctrl-C ends the game through the normal closing path.

pub mod console;
pub mod line;
pub mod renderer;
pub mod style;

pub use tui_hangman_input as input;
pub use tui_hangman_types as types;

pub use console::{BufferedLines, KeyEvents, LineInput, RawTerminal, StdinInput, TerminalConsole};
pub use line::{is_interrupt, read_line_from_keys};
pub use renderer::{encode_frame_into, encode_text_into};
pub use style::{FrameStyle, Rgb};
