//! Word lists for each difficulty [`Level`].
//!
//! The lists are embedded at compile time and parsed once into a
//! [`WordLists`] table, which the game owns for its whole session.
//!
//! | Level  | File             | Coefficient |
//! |--------|------------------|-------------|
//! | Easy   | `words/easy.txt`   | 1 |
//! | Medium | `words/medium.txt` | 2 |
//! | Hard   | `words/hard.txt`   | 3 |
//! | Unix   | `words/unix.txt`   | 4 |

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::warn;

pub use tui_hangman_types as types;

use types::Level;

/// An ordered list of lowercase words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Wrap an explicit list, kept as given
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// One word per line.
    ///
    /// Lines are trimmed and lowercased; blank lines and lines with anything
    /// other than ASCII letters are skipped.
    ///
    /// ```
    /// use tui_hangman_words::WordList;
    ///
    /// let list = WordList::parse("Apple\n\n  grape \nno-way\n");
    /// assert_eq!(list.words(), ["apple", "grape"]);
    /// ```
    pub fn parse(text: &str) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && line.chars().all(|ch| ch.is_ascii_alphabetic()))
            .map(str::to_ascii_lowercase)
            .collect();
        Self { words }
    }

    /// The embedded list for `level`
    pub fn from_level(level: Level) -> Self {
        Self::parse(embedded(level))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Any word, uniformly; `None` for an empty list
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    /// A word not in `used`, uniformly among the rest.
    ///
    /// `None` when every word has been used (or the list is empty).
    pub fn random_word_excluding<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        used: &HashSet<String>,
    ) -> Option<&str> {
        let fresh: Vec<&str> = self
            .words
            .iter()
            .map(String::as_str)
            .filter(|word| !used.contains(*word))
            .collect();
        fresh.choose(rng).copied()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

fn embedded(level: Level) -> &'static str {
    match level {
        Level::Easy => include_str!("../words/easy.txt"),
        Level::Medium => include_str!("../words/medium.txt"),
        Level::Hard => include_str!("../words/hard.txt"),
        Level::Unix => include_str!("../words/unix.txt"),
    }
}

/// Word lists keyed by level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    lists: [WordList; 4],
}

impl WordLists {
    /// Parse every embedded list
    pub fn builtin() -> Self {
        Self {
            lists: Level::ALL.map(WordList::from_level),
        }
    }

    /// Build from explicit lists, in [`Level::ALL`] order
    pub fn from_lists(lists: [WordList; 4]) -> Self {
        Self { lists }
    }

    pub fn get(&self, level: Level) -> &WordList {
        &self.lists[slot(level)]
    }

    /// Pick an unused word for `level`.
    ///
    /// Once every word of the level has been used, repeats are allowed again.
    /// `None` only when the level's list is empty.
    pub fn word_for_level<R: Rng + ?Sized>(
        &self,
        level: Level,
        rng: &mut R,
        used: &HashSet<String>,
    ) -> Option<&str> {
        let list = self.get(level);
        list.random_word_excluding(rng, used).or_else(|| {
            warn!(level = level.as_str(), words = list.len(), "word list exhausted, reusing words");
            list.random_word(rng)
        })
    }

    pub fn coefficient_for_level(&self, level: Level) -> u32 {
        level.coefficient()
    }
}

fn slot(level: Level) -> usize {
    match level {
        Level::Easy => 0,
        Level::Medium => 1,
        Level::Hard => 2,
        Level::Unix => 3,
    }
}
