//! Game rules and session state
//!
//! A [`GameSession`] is owned by whichever front end is running (TUI or
//! line mode). It holds the target word, the guesses so far, the guess being
//! typed and the keyboard hints.

mod keyboard;
pub mod messages;
mod session;

pub use keyboard::KeyboardState;
pub use session::{GameSession, GameStatus, GuessError, ScoredGuess, SubmitOutcome};
