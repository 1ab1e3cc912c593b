//! Word lists for the game
//!
//! Two lists are used: the curated candidate list the target word is drawn
//! from, and the larger acceptance dictionary guesses are validated against.
//! Both are embedded at build time and can be replaced by files.

mod embedded;
mod lists;
pub mod loader;
mod state;

pub use embedded::{COMMON, COMMON_COUNT, FULL, FULL_COUNT};
pub use lists::WordLists;
pub use loader::{LoadError, WordSource};
pub use state::{LoadState, WordListLoader};
