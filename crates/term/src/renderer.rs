//! Frame encoding: turns rendered text into crossterm commands.
//!
//! Encoding goes into a byte buffer first so it can be tested without a
//! terminal and written with a single flush.

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::style::{FrameStyle, Rgb};

/// Encode a multi-line frame into `out`, one styled line at a time.
///
/// Every line, the last one included, is terminated with `\n`. A plain style
/// produces the frame text verbatim.
pub fn encode_frame_into(frame: &str, style: FrameStyle, out: &mut Vec<u8>) -> Result<()> {
    if style.is_plain() {
        return encode_text_into(frame, out);
    }

    for line in frame.lines() {
        apply_style_into(out, style)?;
        out.queue(Print(line))?;
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}

/// Encode unstyled text followed by a line break.
pub fn encode_text_into(text: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(text))?;
    out.queue(Print('\n'))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: FrameStyle) -> Result<()> {
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
