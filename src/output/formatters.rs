//! Formatting utilities for terminal output

use crate::core::{Letter, Mark, Verdict, Word};
use colored::{ColoredString, Colorize};

/// One letter as a coloured tile, e.g. ` K ` on green
#[must_use]
pub fn tile(letter: Letter, mark: Mark) -> ColoredString {
    let text = format!(" {} ", letter.as_str().to_uppercase());
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn tile_row(word: &Word, verdict: Verdict) -> String {
    word.letters()
        .iter()
        .zip(verdict.marks())
        .map(|(&letter, &mark)| tile(letter, mark).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uzbek name of a mark
#[must_use]
pub const fn mark_label(mark: Mark) -> &'static str {
    match mark {
        Mark::Correct => "to‘g‘ri joyda",
        Mark::Present => "boshqa joyda",
        Mark::Absent => "yo‘q",
    }
}
