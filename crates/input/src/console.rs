//! Console abstraction: one line in, one block of text out.

use std::collections::VecDeque;
use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    /// End of input or an interrupt; the game should wind down.
    #[error("input closed")]
    Closed,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Line-oriented text I/O used by the game.
pub trait Console {
    /// Show `prompt` and block until the user enters a line.
    ///
    /// The returned line has its line ending removed and is otherwise exactly
    /// what was typed.
    fn request_line(&mut self, prompt: &str) -> Result<String, InputError>;

    /// Show a block of text (which may contain line breaks).
    fn display_line(&mut self, text: &str) -> Result<(), InputError>;

    /// Show a rendered canvas. Defaults to [`Console::display_line`].
    fn display_frame(&mut self, frame: &str) -> Result<(), InputError> {
        self.display_line(frame)
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn request_line(&mut self, prompt: &str) -> Result<String, InputError> {
        (**self).request_line(prompt)
    }

    fn display_line(&mut self, text: &str) -> Result<(), InputError> {
        (**self).display_line(text)
    }

    fn display_frame(&mut self, frame: &str) -> Result<(), InputError> {
        (**self).display_frame(frame)
    }
}

/// In-memory console fed from a script of lines.
///
/// Once the script runs out, [`Console::request_line`] fails with
/// [`InputError::Closed`], the same way a closed stdin does.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
    frames: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts shown so far, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every displayed block, frames included, in order
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Number of blocks shown through [`Console::display_frame`]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// Whether any displayed block equals `text`
    pub fn displayed(&self, text: &str) -> bool {
        self.output.iter().any(|line| line == text)
    }
}

impl Console for ScriptedConsole {
    fn request_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(InputError::Closed)
    }

    fn display_line(&mut self, text: &str) -> Result<(), InputError> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn display_frame(&mut self, frame: &str) -> Result<(), InputError> {
        self.frames += 1;
        self.display_line(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_replays_inputs_then_closes() {
        let mut console = ScriptedConsole::new(["a", "b"]);
        assert_eq!(console.request_line("1?").unwrap(), "a");
        assert_eq!(console.request_line("2?").unwrap(), "b");
        assert!(matches!(console.request_line("3?"), Err(InputError::Closed)));
        assert_eq!(console.prompts(), ["1?", "2?", "3?"]);
    }

    #[test]
    fn test_frames_are_recorded_as_output() {
        let mut console = ScriptedConsole::default();
        console.display_line("hello").unwrap();
        console.display_frame("+--+").unwrap();
        assert_eq!(console.output(), ["hello", "+--+"]);
        assert_eq!(console.frames(), 1);
        assert!(console.displayed("hello"));
    }

    #[test]
    fn test_mutable_reference_is_a_console() {
        fn greet(mut console: impl Console) {
            console.display_line("hi").unwrap();
        }

        let mut console = ScriptedConsole::default();
        greet(&mut console);
        assert_eq!(console.output(), ["hi"]);
    }
}
