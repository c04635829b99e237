//! Line editing over terminal key events.
//!
//! When stdin is a terminal the line is read in raw mode, one key at a time,
//! so Ctrl-C arrives as a key instead of killing the process.
//!
//! | Key | Effect |
//! |-----|--------|
//! | printable | appended and echoed |
//! | Backspace | last character removed |
//! | Enter | line submitted |
//! | Ctrl-C | [`InputError::Closed`] |
//! | Ctrl-D | [`InputError::Closed`] on an empty line, ignored otherwise |

use std::io::{self, Write};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::InputError;

/// Read one line from `events`, echoing edits to `echo`.
///
/// Running out of events closes the input.
pub fn read_line_from_keys<I>(events: I, echo: &mut dyn Write) -> Result<String, InputError>
where
    I: IntoIterator<Item = io::Result<Event>>,
{
    let mut line = String::new();

    for event in events {
        let Event::Key(key) = event? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        if is_interrupt(&key) {
            echo.write_all(b"^C\r\n")?;
            echo.flush()?;
            return Err(InputError::Closed);
        }
        if is_end_of_input(&key) {
            if line.is_empty() {
                echo.write_all(b"\r\n")?;
                echo.flush()?;
                return Err(InputError::Closed);
            }
            continue;
        }

        match key.code {
            KeyCode::Enter => {
                echo.write_all(b"\r\n")?;
                echo.flush()?;
                return Ok(line);
            }
            KeyCode::Backspace => {
                if line.pop().is_some() {
                    echo.write_all(b"\x08 \x08")?;
                }
            }
            KeyCode::Char(ch) if !has_command_modifier(&key) => {
                line.push(ch);
                write!(echo, "{ch}")?;
            }
            _ => continue,
        }
        echo.flush()?;
    }

    Err(InputError::Closed)
}

/// Ctrl-C
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_end_of_input(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_command_modifier(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
