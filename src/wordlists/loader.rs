//! Word list loading utilities
//!
//! Word lists are newline-delimited plain text. Each line is trimmed and
//! lower-cased; blank lines are ignored and lines that are not a valid
//! 5-letter word are skipped.

use crate::core::{Word, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while fetching or assembling word lists
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list {0} contains no usable words")]
    Empty(String),

    #[error("Word list loader stopped before finishing")]
    Interrupted,
}

/// Where a word list comes from
#[derive(Debug, Clone)]
pub enum WordSource {
    /// A list compiled into the binary
    Embedded {
        name: &'static str,
        words: &'static [&'static str],
    },
    /// A plain text file on disk
    File(PathBuf),
}

impl WordSource {
    /// Use `path` when given, the embedded list otherwise
    #[must_use]
    pub fn file_or_embedded(
        path: Option<&Path>,
        name: &'static str,
        words: &'static [&'static str],
    ) -> Self {
        path.map_or(Self::Embedded { name, words }, |p| Self::File(p.to_path_buf()))
    }

    /// Read and parse the list
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if a file source cannot be read.
    pub fn fetch(&self) -> Result<ParsedList, LoadError> {
        match self {
            Self::Embedded { words, .. } => Ok(parse_lines(words.iter().copied())),
            Self::File(path) => load_from_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded { name, .. } => write!(f, "<embedded {name}>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A line that did not survive parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub reason: WordError,
}

/// Result of parsing one word list
#[derive(Debug, Clone, Default)]
pub struct ParsedList {
    pub words: Vec<Word>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse newline-delimited text into words
///
/// # Examples
/// ```
/// use wordle_uz::wordlists::loader::parse_list;
///
/// let parsed = parse_list("Kitob\n  zabon \n\nmaktab\n");
/// assert_eq!(parsed.words.len(), 2);
/// assert_eq!(parsed.skipped.len(), 1);
/// ```
#[must_use]
pub fn parse_list(text: &str) -> ParsedList {
    parse_lines(text.lines())
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> ParsedList {
    let mut parsed = ParsedList::default();

    for (i, line) in lines.enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match Word::new(trimmed) {
            Ok(word) => parsed.words.push(word),
            Err(reason) => {
                tracing::debug!(line = i + 1, text = trimmed, %reason, "skipping word list entry");
                parsed.skipped.push(SkippedLine {
                    line: i + 1,
                    text: trimmed.to_string(),
                    reason,
                });
            }
        }
    }

    parsed
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_uz::wordlists::loader::load_from_file;
///
/// let parsed = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", parsed.words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ParsedList, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_list(&content))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_uz::wordlists::loader::words_from_slice;
/// use wordle_uz::wordlists::COMMON;
///
/// let words = words_from_slice(COMMON);
/// assert_eq!(words.len(), COMMON.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_trims_and_lowercases() {
        let parsed = parse_list("  KITOB\r\nZabon\n");
        let texts: Vec<&str> = parsed.words.iter().map(Word::text).collect();
        assert_eq!(texts, ["kitob", "zabon"]);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn parse_list_skips_invalid_with_line_numbers() {
        let parsed = parse_list("kitob\nmaktab\n\nkecha\nbahor");

        assert_eq!(parsed.words.len(), 2);
        assert_eq!(parsed.skipped.len(), 2);
        assert_eq!(parsed.skipped[0].line, 2);
        assert_eq!(parsed.skipped[0].reason, WordError::InvalidLength(6));
        assert_eq!(parsed.skipped[1].line, 4);
        assert_eq!(parsed.skipped[1].reason, WordError::InvalidCharacter('c'));
    }

    #[test]
    fn parse_list_normalizes_ticks() {
        let parsed = parse_list("o'rmon\nto`g`ri\n");
        assert_eq!(parsed.words[0].text(), "o‘rmon");
        assert_eq!(parsed.words[1].text(), "to‘g‘ri");
    }

    #[test]
    fn parse_list_empty() {
        let parsed = parse_list("");
        assert!(parsed.words.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["kitob", "toolong", "abc", "zabon"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "kitob");
        assert_eq!(words[1].text(), "zabon");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn source_display() {
        let embedded = WordSource::file_or_embedded(None, "common", &["kitob"]);
        assert_eq!(embedded.to_string(), "<embedded common>");

        let file = WordSource::file_or_embedded(Some(Path::new("w.txt")), "common", &[]);
        assert_eq!(file.to_string(), "w.txt");
    }

    #[test]
    fn embedded_source_fetches_words() {
        let source = WordSource::Embedded {
            name: "test",
            words: &["kitob", "bad"],
        };
        let parsed = source.fetch().unwrap();
        assert_eq!(parsed.words.len(), 1);
        assert_eq!(parsed.skipped.len(), 1);
    }
}
