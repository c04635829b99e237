//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, the game loop).
//!
//! # Display Dimensions
//!
//! Every ASCII-art layer is padded to [`MAX_DISPLAY_WIDTH`] columns so that all
//! layers of a canvas share one shape.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_DISPLAY_WIDTH` | 80 | Width of every layer and of wrapped menus |
//! | `LIVES` | 6 | Body parts in the reserve (difficulty independent) |
//! | `DEFAULT_REWARD` | 2 | Points per occurrence of a correct guess |
//! | `DEFAULT_PENALTY` | 1 | Points lost per incorrect guess |
//! | `MASK_CHAR` | `_` | Placeholder for a hidden letter |
//! | `BLANK` | `' '` | Transparent padding character |
//!
//! # Levels
//!
//! | Level | Coefficient |
//! |-------|-------------|
//! | Easy | 1 |
//! | Medium | 2 |
//! | Hard | 3 |
//! | Unix | 4 |
//!
//! # Examples
//!
//! ```
//! use tui_hangman_types::{Level, RoundState, LIVES};
//!
//! // Parse from string (case-insensitive)
//! let level = Level::from_str("uNiX").unwrap();
//! assert_eq!(level, Level::Unix);
//! assert_eq!(level.coefficient(), 4);
//!
//! assert!(!RoundState::InProgress.is_terminal());
//! assert_eq!(LIVES, 6);
//! ```

use std::fmt;

/// Width every layer is padded to (80 columns)
pub const MAX_DISPLAY_WIDTH: usize = 80;

/// Number of body-part layers in a fresh reserve
pub const LIVES: usize = 6;

/// Points per occurrence of a correctly guessed letter, before the coefficient
pub const DEFAULT_REWARD: u32 = 2;

/// Points removed per incorrect guess, before the coefficient
pub const DEFAULT_PENALTY: u32 = 1;

/// Placeholder shown for hidden letters
pub const MASK_CHAR: char = '_';

/// Padding character; whitespace is transparent when layers merge
pub const BLANK: char = ' ';


/// Difficulty levels
///
/// Each level selects its own word list and a scoring coefficient:
/// - **Easy**: common short words, coefficient 1
/// - **Medium**: everyday vocabulary, coefficient 2
/// - **Hard**: uncommon words, coefficient 3
/// - **Unix**: the classic system dictionary flavour, coefficient 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Easy,
    Medium,
    Hard,
    Unix,
}

impl Level {
    /// All levels, easiest first
    pub const ALL: [Level; 4] = [Level::Easy, Level::Medium, Level::Hard, Level::Unix];

    /// Parse level from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_hangman_types::Level;
    ///
    /// assert_eq!(Level::from_str("easy"), Some(Level::Easy));
    /// assert_eq!(Level::from_str("HARD"), Some(Level::Hard));
    /// assert_eq!(Level::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "EASY" => Some(Level::Easy),
            "MEDIUM" => Some(Level::Medium),
            "HARD" => Some(Level::Hard),
            "UNIX" => Some(Level::Unix),
            _ => None,
        }
    }

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Easy => "EASY",
            Level::Medium => "MEDIUM",
            Level::Hard => "HARD",
            Level::Unix => "UNIX",
        }
    }

    /// Human-facing name, e.g. `"Easy"`
    pub fn title(&self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::Medium => "Medium",
            Level::Hard => "Hard",
            Level::Unix => "Unix",
        }
    }

    /// Scoring multiplier for rewards and penalties at this level
    pub fn coefficient(&self) -> u32 {
        match self {
            Level::Easy => 1,
            Level::Medium => 2,
            Level::Hard => 3,
            Level::Unix => 4,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a single round
///
/// The round starts `InProgress` and ends in exactly one terminal state:
/// - **Won**: every letter of the word was revealed
/// - **Lost**: the reserve of body parts ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

impl RoundState {
    /// Whether the round has ended
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundState::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundState::InProgress => "in_progress",
            RoundState::Won => "won",
            RoundState::Lost => "lost",
        }
    }
}
