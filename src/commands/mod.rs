//! Command implementations

pub mod check;
pub mod score;
pub mod simple;

pub use check::{CheckReport, check_lists};
pub use score::{ScoreResult, score_words};
pub use simple::{play_lines, run_simple};
