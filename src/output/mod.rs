//! Terminal output formatting
//!
//! Display utilities for the line-mode game and the utility commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_report, print_score_result};
