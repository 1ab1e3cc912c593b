//! Score command
//!
//! Scores one guess against one target without a dictionary check.

use crate::core::{Verdict, Word};

/// Result of scoring a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub verdict: Verdict,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter Uzbek word.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("Invalid target: {e}"))?;
    let verdict = Verdict::score(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_two_words() {
        let result = score_words("zabon", "kitob").unwrap();
        assert_eq!(result.verdict.to_string(), "--YG-");
        assert_eq!(result.guess.text(), "zabon");
    }

    #[test]
    fn accepts_any_tick_spelling() {
        let result = score_words("O'rmon", "o‘rmon").unwrap();
        assert!(result.verdict.is_solved());
        assert_eq!(result.guess.text(), "o‘rmon");
    }

    #[test]
    fn rejects_bad_input() {
        let err = score_words("kit", "kitob").unwrap_err();
        assert!(err.starts_with("Invalid guess"));

        let err = score_words("kitob", "cable").unwrap_err();
        assert!(err.starts_with("Invalid target"));
    }
}
