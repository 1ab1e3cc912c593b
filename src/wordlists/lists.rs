//! The pair of word lists a game is played with

use super::loader::{LoadError, WordSource};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Candidate list plus acceptance dictionary
///
/// The dictionary always contains every candidate, so the target word is
/// guessable even when the two source files disagree.
#[derive(Debug, Clone)]
pub struct WordLists {
    candidates: Vec<Word>,
    dictionary: FxHashSet<Word>,
}

impl WordLists {
    /// Assemble word lists from already parsed words
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] if there are no candidates to draw a
    /// target from.
    pub fn new(candidates: Vec<Word>, dictionary: Vec<Word>) -> Result<Self, LoadError> {
        if candidates.is_empty() {
            return Err(LoadError::Empty("of candidate words".to_string()));
        }

        let mut set: FxHashSet<Word> = dictionary.into_iter().collect();
        set.extend(candidates.iter().cloned());

        Ok(Self {
            candidates,
            dictionary: set,
        })
    }

    /// Fetch both sources and assemble them
    ///
    /// # Errors
    ///
    /// Returns an error if either source cannot be read or the candidate list
    /// ends up empty.
    pub fn load(common: &WordSource, full: &WordSource) -> Result<Self, LoadError> {
        let candidates = common.fetch()?;
        let dictionary = full.fetch()?;

        tracing::info!(
            common = %common,
            full = %full,
            candidates = candidates.words.len(),
            dictionary = dictionary.words.len(),
            skipped = candidates.skipped.len() + dictionary.skipped.len(),
            "word lists loaded"
        );

        if candidates.words.is_empty() {
            return Err(LoadError::Empty(common.to_string()));
        }

        Self::new(candidates.words, dictionary.words)
    }

    /// Is `word` an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    /// Draw a target word uniformly from the candidates
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.candidates.choose(rng)
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of distinct accepted guesses
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}
