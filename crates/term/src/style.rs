//! Frame styling for the terminal console.

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// How the hangman canvas is drawn.
///
/// A style without a foreground colour and without bold emits no escape
/// sequences at all, so the output is safe for pipes and dumb terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
}

impl FrameStyle {
    /// Plain text, no escapes
    pub const fn plain() -> Self {
        Self {
            fg: None,
            bold: false,
        }
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && !self.bold
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            fg: Some(Rgb::new(230, 180, 80)),
            bold: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_styled() {
        assert!(!FrameStyle::default().is_plain());
        assert!(FrameStyle::plain().is_plain());
    }
}
