//! Guess scoring
//!
//! A verdict is the per-position feedback for one guess:
//! - `Correct`: right letter, right position (green)
//! - `Present`: letter is in the word elsewhere (yellow)
//! - `Absent`: letter is not in the word, or all its copies are already claimed (gray)

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single position
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Emoji square used in shareable results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// One-letter code (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict([Mark; WORD_LENGTH]);

impl Verdict {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Score `guess` against `target`
    ///
    /// Duplicate letters are handled the classic way: a letter earns at most
    /// as many `Correct`/`Present` marks as it has copies in the target, and
    /// exact positions claim their copies first.
    ///
    /// # Algorithm
    /// 1. Count every letter of the target
    /// 2. First pass: mark exact matches `Correct` and consume their copies
    /// 3. Second pass: mark remaining letters `Present` while copies are left,
    ///    `Absent` otherwise
    ///
    /// # Examples
    /// ```
    /// use wordle_uz::core::{Mark, Verdict, Word};
    ///
    /// let target = Word::new("apple").unwrap();
    /// let guess = Word::new("eppaa").unwrap();
    /// let verdict = Verdict::score(&guess, &target);
    ///
    /// // e(yellow) p(green) p(green) a(yellow) a(gray)
    /// assert_eq!(verdict, "YGGY-".parse().unwrap());
    /// assert_eq!(verdict.marks()[4], Mark::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: exact positions
        for (i, (g, t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                marks[i] = Mark::Correct;
                if let Some(count) = available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from what is left
        for (mark, letter) in marks.iter_mut().zip(guess.letters()) {
            if *mark == Mark::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(letter)
                && *count > 0
            {
                *mark = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Count the number of green positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Correct).count()
    }

    /// Count the number of yellow positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Convert verdict to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

/// Parse a verdict from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for correct
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜ for absent
impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid verdict string: {s}"));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Present,
                '-' | '_' | '⬜' => Mark::Absent,
                _ => return Err(format!("Invalid verdict string: {s}")),
            };
        }

        Ok(Self(marks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, target: &str) -> Verdict {
        Verdict::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    fn verdict(s: &str) -> Verdict {
        s.parse().unwrap()
    }

    #[test]
    fn solved_constant() {
        assert!(Verdict::SOLVED.is_solved());
        assert_eq!(Verdict::SOLVED.count_correct(), 5);
        assert_eq!(Verdict::SOLVED.count_present(), 0);
    }

    #[test]
    fn identical_words_are_solved() {
        assert_eq!(score("zabon", "zabon"), Verdict::SOLVED);
        assert_eq!(score("to‘g‘ri", "to'g'ri"), Verdict::SOLVED);
    }

    #[test]
    fn single_shared_letter() {
        let v = score("kitob", "zamba");
        // only b overlaps: kitob has b at 4, zamba has b at 3
        assert_eq!(v, verdict("----Y"));
        assert_eq!(v.count_correct(), 0);
        assert_eq!(v.count_present(), 1);
    }

    #[test]
    fn anagram_is_all_present() {
        let v = score("tobik", "kitob");
        assert_eq!(v, verdict("YYYYY"));
    }

    #[test]
    fn duplicate_letters_capped_by_target() {
        // apple has one a, two p, one l, one e
        let v = score("eppaa", "apple");
        assert_eq!(v, verdict("YGGY-"));
    }

    #[test]
    fn duplicate_letters_exact_position_claims_first() {
        // erkak: one e, one r, two k, one a
        // both trailing k's are exact, so the leading k gets nothing
        let v = score("kokak", "erkak");
        assert_eq!(v, verdict("--GGG"));

        let v = score("kkkxx", "erkak");
        assert_eq!(v, verdict("Y-G--"));
    }

    #[test]
    fn duplicate_letters_both_present() {
        // speed vs erase: both e's present, s present
        let v = score("speed", "erase");
        assert_eq!(v, verdict("Y-YY-"));
    }

    #[test]
    fn ticked_letters_differ_from_plain() {
        // o and o‘ are different letters
        let v = score("osmon", "o‘rmon");
        assert_eq!(v, verdict("--GGG"));

        let v = score("qog‘oz", "g‘olib");
        // the o at 1 is exact and uses the only o, g‘ is misplaced
        assert_eq!(v, verdict("-GY--"));
    }

    #[test]
    fn display_and_emoji() {
        let v = verdict("GY-GY");
        assert_eq!(v.to_string(), "GY-GY");
        assert_eq!(v.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn from_str_accepts_all_notations() {
        assert_eq!(verdict("GYG--"), verdict("🟩🟨🟩⬜⬜"));
        assert_eq!(verdict("GYG--"), verdict("gyg__"));
    }

    #[test]
    fn from_str_invalid() {
        assert!("GYGGYX".parse::<Verdict>().is_err());
        assert!("GYG".parse::<Verdict>().is_err());
        assert!("GXGGY".parse::<Verdict>().is_err());
        assert!("".parse::<Verdict>().is_err());
    }

    #[test]
    fn mark_ordering() {
        assert!(Mark::Absent < Mark::Present);
        assert!(Mark::Present < Mark::Correct);
    }
}
