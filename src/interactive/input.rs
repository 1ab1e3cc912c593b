//! Keyboard input mapping
//!
//! Terminal key events are translated into game inputs here so the app logic
//! never sees crossterm types.

use crate::core::Letter;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything the player can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(Letter),
    /// Apostrophe: turns a trailing `o`/`g` into `o‘`/`g‘`
    Tick,
    Backspace,
    Submit,
    ToggleHelp,
    ToggleTheme,
    NewGame,
    Quit,
}

/// Translate a key event
///
/// Shift+G types `g‘` and Shift+O types `o‘`. Any other letter is
/// case-insensitive. Keys outside the alphabet map to `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Input> {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Input::Quit),
        KeyCode::Char('n') if ctrl => Some(Input::NewGame),
        _ if ctrl => None,
        KeyCode::Esc => Some(Input::Quit),
        KeyCode::Enter => Some(Input::Submit),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Tab => Some(Input::ToggleTheme),
        KeyCode::Char('?') => Some(Input::ToggleHelp),
        KeyCode::Char('G') => Some(Input::Letter(Letter::G_TICK)),
        KeyCode::Char('O') => Some(Input::Letter(Letter::O_TICK)),
        KeyCode::Char(c) if Letter::is_tick(c) => Some(Input::Tick),
        KeyCode::Char(c) => Letter::from_char(c).map(Input::Letter),
        _ => None,
    }
}
