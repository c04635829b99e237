//! TerminalConsole: the game's [`Console`] over a real terminal.
//!
//! On an interactive terminal each line is read key by key in raw mode (see
//! [`crate::line`]), so both Ctrl-C and Ctrl-D close the console. Piped input
//! is read line by line and closes at end of input.

use std::io::{self, BufRead, IsTerminal, Write};
use std::iter;

use crossterm::{event, terminal};

use crate::input::{Console, InputError};
use crate::line::read_line_from_keys;
use crate::renderer::{encode_frame_into, encode_text_into};
use crate::style::FrameStyle;

/// Where typed lines come from.
pub trait LineInput {
    /// Read one line without its line ending, echoing to `echo` if needed.
    fn read_line(&mut self, echo: &mut dyn Write) -> Result<String, InputError>;
}

/// Lines from a buffered reader; the terminal (if any) does the echoing.
#[derive(Debug)]
pub struct BufferedLines<R>(pub R);

impl<R: BufRead> LineInput for BufferedLines<R> {
    fn read_line(&mut self, _echo: &mut dyn Write) -> Result<String, InputError> {
        let mut line = String::new();
        if self.0.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// Lines edited from a stream of key events.
#[derive(Debug)]
pub struct KeyEvents<I> {
    events: I,
}

impl<I> KeyEvents<I>
where
    I: Iterator<Item = io::Result<event::Event>>,
{
    pub fn new(events: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            events: events.into_iter(),
        }
    }
}

impl<I> LineInput for KeyEvents<I>
where
    I: Iterator<Item = io::Result<event::Event>>,
{
    fn read_line(&mut self, echo: &mut dyn Write) -> Result<String, InputError> {
        read_line_from_keys(&mut self.events, echo)
    }
}

/// Key events from the controlling terminal, in raw mode while reading.
#[derive(Debug, Default)]
pub struct RawTerminal;

impl LineInput for RawTerminal {
    fn read_line(&mut self, echo: &mut dyn Write) -> Result<String, InputError> {
        terminal::enable_raw_mode()?;
        let line = read_line_from_keys(iter::from_fn(|| Some(event::read())), echo);
        // Restore cooked mode even when the read failed.
        terminal::disable_raw_mode()?;
        line
    }
}

/// The process's stdin, picked by whether it is a terminal.
#[derive(Debug)]
pub enum StdinInput {
    Keys(RawTerminal),
    Lines(BufferedLines<io::StdinLock<'static>>),
}

impl StdinInput {
    pub fn detect() -> Self {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            StdinInput::Keys(RawTerminal)
        } else {
            StdinInput::Lines(BufferedLines(stdin.lock()))
        }
    }
}

impl LineInput for StdinInput {
    fn read_line(&mut self, echo: &mut dyn Write) -> Result<String, InputError> {
        match self {
            StdinInput::Keys(keys) => keys.read_line(echo),
            StdinInput::Lines(lines) => lines.read_line(echo),
        }
    }
}

pub struct TerminalConsole<I, W> {
    input: I,
    writer: W,
    style: FrameStyle,
    buf: Vec<u8>,
}

impl TerminalConsole<StdinInput, io::Stdout> {
    /// Console over the process's stdin and stdout
    pub fn stdio(style: FrameStyle) -> Self {
        Self::with_input(StdinInput::detect(), io::stdout(), style)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<BufferedLines<R>, W> {
    pub fn with_io(reader: R, writer: W, style: FrameStyle) -> Self {
        Self::with_input(BufferedLines(reader), writer, style)
    }
}

impl<I: LineInput, W: Write> TerminalConsole<I, W> {
    pub fn with_input(input: I, writer: W, style: FrameStyle) -> Self {
        Self {
            input,
            writer,
            style,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn style(&self) -> FrameStyle {
        self.style
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_buf(&mut self) -> Result<(), InputError> {
        self.writer.write_all(&self.buf)?;
        self.writer.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl<I: LineInput, W: Write> Console for TerminalConsole<I, W> {
    fn request_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.buf.clear();
        self.buf.extend_from_slice(prompt.as_bytes());
        self.flush_buf()?;

        self.input.read_line(&mut self.writer)
    }

    fn display_line(&mut self, text: &str) -> Result<(), InputError> {
        self.buf.clear();
        encode_text_into(text, &mut self.buf).map_err(into_input_error)?;
        self.flush_buf()
    }

    fn display_frame(&mut self, frame: &str) -> Result<(), InputError> {
        self.buf.clear();
        encode_frame_into(frame, self.style, &mut self.buf).map_err(into_input_error)?;
        self.flush_buf()
    }
}

fn into_input_error(err: anyhow::Error) -> InputError {
    match err.downcast::<io::Error>() {
        Ok(err) => InputError::Io(err),
        Err(err) => InputError::Io(io::Error::other(err.to_string())),
    }
}
