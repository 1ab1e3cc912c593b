//! Interactive TUI
//!
//! The full-screen game: board, virtual keyboard, notifications and help.

mod app;
mod input;
mod rendering;

pub use app::{App, MessageStyle, Notification, run_tui};
pub use input::{Input, map_key};
