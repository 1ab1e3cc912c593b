//! Per-letter hints for the virtual keyboard

use crate::core::{Letter, Mark, Verdict, Word};
use rustc_hash::FxHashMap;

/// Best mark seen so far for each letter
///
/// A mark only ever moves up: `Correct` beats `Present` beats `Absent`, and
/// `Absent` is recorded only for letters with no hint yet.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    marks: FxHashMap<Letter, Mark>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the hints
    pub fn record(&mut self, guess: &Word, verdict: Verdict) {
        for (&letter, &mark) in guess.letters().iter().zip(verdict.marks()) {
            let best = self.marks.entry(letter).or_insert(mark);
            *best = (*best).max(mark);
        }
    }

    /// Hint for `letter`, `None` if it was never guessed
    #[inline]
    #[must_use]
    pub fn mark_of(&self, letter: Letter) -> Option<Mark> {
        self.marks.get(&letter).copied()
    }
}
