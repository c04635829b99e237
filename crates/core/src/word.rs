//! Word module - the secret word and its reveal mask
//!
//! The secret is stored ASCII-uppercased. Each character maps to every index
//! where it occurs, so a guess reveals all occurrences at once.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::types::MASK_CHAR;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    #[error("the secret word must not be empty")]
    Empty,
}

/// A word being guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordState {
    secret: String,
    letters: Vec<char>,
    positions: BTreeMap<char, Vec<usize>>,
    revealed: Vec<bool>,
}

impl WordState {
    /// Create a fully hidden word.
    ///
    /// ```
    /// use tui_hangman_core::WordState;
    ///
    /// let mut word = WordState::new("apple").unwrap();
    /// assert_eq!(word.guess('p'), 2);
    /// assert_eq!(word.current_display(), "_ P P _ _");
    /// assert!(!word.is_fully_revealed());
    /// ```
    pub fn new(secret: &str) -> Result<Self, WordError> {
        if secret.is_empty() {
            return Err(WordError::Empty);
        }

        let secret = secret.to_ascii_uppercase();
        let letters: Vec<char> = secret.chars().collect();
        let mut positions: BTreeMap<char, Vec<usize>> = BTreeMap::new();
        for (index, &ch) in letters.iter().enumerate() {
            positions.entry(ch).or_default().push(index);
        }

        Ok(Self {
            revealed: vec![false; letters.len()],
            secret,
            letters,
            positions,
        })
    }

    /// The normalized secret; only show it once the round is over
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Number of characters in the secret
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, guess: char) -> bool {
        self.positions.contains_key(&guess.to_ascii_uppercase())
    }

    /// Reveal every occurrence of `guess` and return how many there are.
    ///
    /// Returns 0 when the character does not occur. Guessing a revealed
    /// character again returns the same count and leaves the mask as is.
    pub fn guess(&mut self, guess: char) -> usize {
        let Some(indices) = self.positions.get(&guess.to_ascii_uppercase()) else {
            return 0;
        };

        for &index in indices {
            self.revealed[index] = true;
        }
        indices.len()
    }

    /// Letters space-separated, hidden ones shown as `_`
    pub fn current_display(&self) -> String {
        let mut out = String::with_capacity(self.letters.len() * 2);
        for (i, (&ch, &shown)) in self.letters.iter().zip(&self.revealed).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(if shown { ch } else { MASK_CHAR });
        }
        out
    }

    /// Number of positions still hidden
    pub fn hidden_count(&self) -> usize {
        self.revealed.iter().filter(|&&shown| !shown).count()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.iter().all(|&shown| shown)
    }
}

impl fmt::Display for WordState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_uppercased() {
        let word = WordState::new("Apple").unwrap();
        assert_eq!(word.secret(), "APPLE");
        assert_eq!(word.to_string(), "APPLE");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert_eq!(WordState::new(""), Err(WordError::Empty));
    }

    #[test]
    fn test_positions_cover_every_index() {
        let word = WordState::new("banana").unwrap();
        assert_eq!(word.positions[&'B'], vec![0]);
        assert_eq!(word.positions[&'A'], vec![1, 3, 5]);
        assert_eq!(word.positions[&'N'], vec![2, 4]);
        assert_eq!(word.revealed.len(), word.letters.len());
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let mut word = WordState::new("apple").unwrap();
        assert!(word.contains('a'));
        assert!(word.contains('A'));
        assert_eq!(word.guess('l'), 1);
        assert_eq!(word.current_display(), "_ _ _ L _");
    }

    #[test]
    fn test_absent_guess_keeps_mask() {
        let mut word = WordState::new("apple").unwrap();
        assert_eq!(word.guess('z'), 0);
        assert_eq!(word.current_display(), "_ _ _ _ _");
        assert_eq!(word.hidden_count(), 5);
    }

    #[test]
    fn test_reguess_returns_total_count() {
        let mut word = WordState::new("apple").unwrap();
        assert_eq!(word.guess('p'), 2);
        let after_first = word.clone();
        assert_eq!(word.guess('P'), 2);
        assert_eq!(word, after_first);
    }
}
