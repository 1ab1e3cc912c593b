//! Wordle.uz
//!
//! Uzbek Wordle in the terminal: find the hidden five-letter word in six
//! tries. `o‘` and `g‘` count as single letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_uz::core::{Verdict, Word};
//!
//! let guess = Word::new("zabon").unwrap();
//! let target = Word::new("kitob").unwrap();
//!
//! let verdict = Verdict::score(&guess, &target);
//! assert_eq!(verdict.to_string(), "--YG-");
//! println!("{}", verdict.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game rules and session state
pub mod game;

// Layered configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
