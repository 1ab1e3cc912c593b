//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable without a terminal.

mod alphabet;
mod verdict;
mod word;

pub use alphabet::{ALPHABET, Letter, parse_letters};
pub use verdict::{Mark, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};

/// Guesses allowed per game
pub const MAX_GUESSES: usize = 6;
