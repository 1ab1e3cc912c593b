//! Word list check command
//!
//! Loads both lists the way the game does and reports what a maintainer
//! should fix: unparsable lines, duplicates, and candidate words missing from
//! the full dictionary.

use crate::core::Word;
use crate::wordlists::loader::SkippedLine;
use crate::wordlists::{LoadError, WordSource};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashSet;

/// Findings for one pair of word lists
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub common_source: String,
    pub full_source: String,
    pub candidates: usize,
    pub dictionary: usize,
    pub skipped_common: Vec<SkippedLine>,
    pub skipped_full: Vec<SkippedLine>,
    /// Words listed more than once in the candidate list
    pub duplicates: Vec<Word>,
    /// Candidates the full dictionary does not list
    pub missing: Vec<Word>,
}

impl CheckReport {
    /// Nothing needs fixing
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_common.is_empty()
            && self.skipped_full.is_empty()
            && self.duplicates.is_empty()
            && self.missing.is_empty()
    }
}

/// Check a candidate list against a full dictionary
///
/// # Errors
///
/// Returns [`LoadError`] if either source cannot be read or the candidate
/// list has no usable words.
pub fn check_lists(common: &WordSource, full: &WordSource) -> Result<CheckReport, LoadError> {
    let common_list = common.fetch()?;
    let full_list = full.fetch()?;

    if common_list.words.is_empty() {
        return Err(LoadError::Empty(common.to_string()));
    }

    let dictionary: FxHashSet<&Word> = full_list.words.iter().collect();
    let mut seen: FxHashSet<&Word> = FxHashSet::default();
    let mut duplicates = Vec::new();
    let mut missing = Vec::new();

    let pb = ProgressBar::new(common_list.words.len() as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    for word in &common_list.words {
        pb.set_message(word.text().to_string());
        if !seen.insert(word) {
            duplicates.push(word.clone());
        } else if !dictionary.contains(word) {
            missing.push(word.clone());
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    tracing::info!(
        missing = missing.len(),
        duplicates = duplicates.len(),
        "word lists checked"
    );

    Ok(CheckReport {
        common_source: common.to_string(),
        full_source: full.to_string(),
        candidates: seen.len(),
        dictionary: dictionary.len(),
        skipped_common: common_list.skipped,
        skipped_full: full_list.skipped,
        duplicates,
        missing,
    })
}
