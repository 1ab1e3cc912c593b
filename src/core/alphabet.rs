//! The Uzbek Latin alphabet
//!
//! The game uses a fixed 26-letter alphabet. Two of the letters, `o‘` and `g‘`,
//! are written with two characters but count as a single letter everywhere:
//! on the board, in word length checks and in scoring.

use super::word::WordError;
use std::fmt;

/// Every letter of the alphabet in keyboard-independent order
pub const ALPHABET: [&str; 26] = [
    "a", "b", "d", "e", "f", "g", "g‘", "h", "i", "j", "k", "l", "m", "n", "o", "o‘", "p", "q",
    "r", "s", "t", "u", "v", "x", "y", "z",
];

/// Characters accepted as the tick that turns `o` into `o‘` and `g` into `g‘`
///
/// Word lists and keyboards in the wild use any of these interchangeably.
const TICKS: [char; 6] = ['\'', '\u{2018}', '\u{2019}', '\u{02BB}', '\u{02BC}', '`'];

/// A single letter of the Uzbek alphabet
///
/// Stored as an index into [`ALPHABET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// `g‘`
    pub const G_TICK: Self = Self(6);
    /// `o‘`
    pub const O_TICK: Self = Self(15);

    const G: Self = Self(5);
    const O: Self = Self(14);

    /// Letter at `index` in [`ALPHABET`], if any
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < ALPHABET.len() {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Position of this letter in [`ALPHABET`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Parse a single-character letter (case-insensitive)
    ///
    /// `o‘` and `g‘` are never produced here; see [`Letter::with_tick`].
    ///
    /// # Examples
    /// ```
    /// use wordle_uz::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('K').unwrap().as_str(), "k");
    /// assert!(Letter::from_char('c').is_none());
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        let mut buf = [0u8; 4];
        let needle: &str = c.encode_utf8(&mut buf);

        ALPHABET
            .iter()
            .position(|&letter| letter == needle)
            .map(|i| Self(i as u8))
    }

    /// The canonical spelling of this letter
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        ALPHABET[self.0 as usize]
    }

    /// The ticked form of `o` or `g`
    ///
    /// Returns `None` for every other letter, including letters that already
    /// carry a tick.
    #[must_use]
    pub const fn with_tick(self) -> Option<Self> {
        match self {
            Self::O => Some(Self::O_TICK),
            Self::G => Some(Self::G_TICK),
            _ => None,
        }
    }

    /// Whether `c` is one of the accepted tick characters
    #[inline]
    #[must_use]
    pub fn is_tick(c: char) -> bool {
        TICKS.contains(&c)
    }

    /// Iterate over the whole alphabet
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET.len() as u8).map(Self)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split text into alphabet letters
///
/// A tick directly after `o` or `g` merges into that letter. Any character
/// outside the alphabet is rejected, as is a tick that follows anything else.
///
/// # Errors
/// Returns [`WordError::InvalidCharacter`] for the first offending character.
///
/// # Examples
/// ```
/// use wordle_uz::core::parse_letters;
///
/// let letters = parse_letters("o'rmon").unwrap();
/// assert_eq!(letters.len(), 5);
/// assert_eq!(letters[0].as_str(), "o‘");
/// ```
pub fn parse_letters(text: &str) -> Result<Vec<Letter>, WordError> {
    let mut letters: Vec<Letter> = Vec::with_capacity(text.len());

    for c in text.chars() {
        if Letter::is_tick(c) {
            if let Some(last) = letters.last_mut()
                && let Some(ticked) = last.with_tick()
            {
                *last = ticked;
                continue;
            }
            return Err(WordError::InvalidCharacter(c));
        }

        let letter = Letter::from_char(c).ok_or(WordError::InvalidCharacter(c))?;
        letters.push(letter);
    }

    Ok(letters)
}
