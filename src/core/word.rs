//! Five-letter word representation
//!
//! A Word stores its letters as alphabet indices plus the canonical spelling
//! used for display and dictionary lookups.

use super::alphabet::{Letter, parse_letters};
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Uzbek word
///
/// Two words are equal when their letters are equal, so `o'rmon` and `o‘rmon`
/// are the same word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("Character {0:?} is not part of the Uzbek alphabet")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lower-cased first. Length is counted in letters, so
    /// `to‘g‘ri` is a valid 5-letter word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - A character is outside the alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_uz::core::Word;
    ///
    /// let word = Word::new("Kitob").unwrap();
    /// assert_eq!(word.text(), "kitob");
    ///
    /// assert!(Word::new("to'g'ri").is_ok());
    /// assert!(Word::new("maktab").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let lowered = text.as_ref().to_lowercase();
        let letters = parse_letters(&lowered)?;

        let len = letters.len();
        let letters: [Letter; WORD_LENGTH] = letters
            .try_into()
            .map_err(|_| WordError::InvalidLength(len))?;

        Ok(Self::from_letters(letters))
    }

    /// Build a word from exactly five letters
    #[must_use]
    pub fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        let text = letters.iter().map(|l| l.as_str()).collect();
        Self { text, letters }
    }

    /// Canonical spelling (lower case, `‘` ticks)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<Letter, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
