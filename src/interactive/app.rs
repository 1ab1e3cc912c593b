//! TUI application state and logic

use super::input::{Input, map_key};
use crate::config::{Theme, UiConfig};
use crate::game::{GameSession, SubmitOutcome, messages};
use crate::wordlists::{LoadState, WordListLoader, WordLists};
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How often the loop wakes up without input
const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Success,
    Error,
}

/// A transient message shown above the board
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub style: MessageStyle,
    expires_at: Instant,
}

/// Application state
///
/// Owns the word list loader and the current game. Every input is handled
/// to completion before the next one is read.
pub struct App {
    loader: WordListLoader,
    session: Option<GameSession>,
    notification: Option<Notification>,
    notification_ttl: Duration,
    bell: bool,
    pending_bell: bool,
    pub theme: Theme,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(loader: WordListLoader, ui: &UiConfig) -> Self {
        Self {
            loader,
            session: None,
            notification: None,
            notification_ttl: Duration::from_millis(ui.notification_ms),
            bell: ui.bell,
            pending_bell: false,
            theme: ui.theme,
            show_help: false,
            should_quit: false,
        }
    }

    /// The current game, once word lists are ready
    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Word lists are loaded and a game can be played
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.session.is_some()
    }

    fn lists(&self) -> Option<Arc<WordLists>> {
        self.loader.state().lists().cloned()
    }

    /// Advance time: pick up finished loads and expire notifications
    pub fn tick(&mut self, now: Instant) {
        if self.session.is_none()
            && let LoadState::Ready(lists) = self.loader.poll()
        {
            let lists = Arc::clone(lists);
            self.session = GameSession::start(&lists, &mut rand::rng());
        }

        if self
            .notification
            .as_ref()
            .is_some_and(|n| now >= n.expires_at)
        {
            self.notification = None;
        }
    }

    pub fn new_game(&mut self) {
        if let Some(lists) = self.lists() {
            self.session = GameSession::start(&lists, &mut rand::rng());
            self.notification = None;
        }
    }

    /// Show a message for the configured duration
    pub fn notify(&mut self, text: impl Into<String>, style: MessageStyle, now: Instant) {
        self.notification = Some(Notification {
            text: text.into(),
            style,
            expires_at: now + self.notification_ttl,
        });
        if self.bell {
            self.pending_bell = true;
        }
    }

    /// Whether a bell is owed since the last call
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.pending_bell)
    }

    pub fn handle_input(&mut self, input: Input, now: Instant) {
        match input {
            Input::Quit => {
                self.should_quit = true;
                return;
            }
            Input::ToggleHelp => {
                self.show_help = !self.show_help;
                return;
            }
            Input::ToggleTheme => {
                self.theme = self.theme.toggled();
                return;
            }
            Input::NewGame => {
                self.new_game();
                return;
            }
            _ => {}
        }

        // Game input is ignored until the lists are ready
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match input {
            Input::Letter(letter) => {
                session.push_letter(letter);
            }
            Input::Tick => {
                session.apply_tick();
            }
            Input::Backspace => {
                session.backspace();
            }
            Input::Submit => self.submit(now),
            _ => {}
        }
    }

    fn submit(&mut self, now: Instant) {
        let Some(lists) = self.lists() else {
            return;
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.submit(&lists) {
            Ok(outcome) => {
                if let Some(text) = outcome.player_message() {
                    let style = match outcome {
                        SubmitOutcome::Won(_) => MessageStyle::Success,
                        _ => MessageStyle::Error,
                    };
                    self.notify(text, style, now);
                }
            }
            Err(err) => {
                if let Some(text) = err.player_message() {
                    self.notify(text, MessageStyle::Error, now);
                }
            }
        }
    }

    /// Line shown while the game cannot be played yet
    #[must_use]
    pub const fn status_line(&self) -> Option<&'static str> {
        if self.session.is_none() {
            Some(messages::LOADING)
        } else {
            None
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI stopped");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if app.take_bell() {
            ring_bell()?;
        }

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && let Some(input) = map_key(key)
        {
            app.handle_input(input, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// The terminal's stand-in for a haptic pulse
fn ring_bell() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, parse_letters};
    use crate::game::GameStatus;
    use crate::wordlists::loader::words_from_slice;

    fn ready_app() -> App {
        let lists = WordLists::new(
            words_from_slice(&["kitob"]),
            words_from_slice(&["zabon", "bahor", "qalam", "daryo", "inson", "vatan"]),
        )
        .unwrap();
        let mut app = App::new(WordListLoader::ready(lists), &UiConfig::default());
        app.tick(Instant::now());
        app
    }

    fn type_word(app: &mut App, text: &str, now: Instant) {
        for letter in parse_letters(text).unwrap() {
            app.handle_input(Input::Letter(letter), now);
        }
    }

    #[test]
    fn not_ready_until_lists_load() {
        let mut app = App::new(WordListLoader::new(), &UiConfig::default());
        app.tick(Instant::now());
        assert!(!app.is_ready());
        assert_eq!(app.status_line(), Some(messages::LOADING));

        // Game input is ignored while loading
        app.handle_input(Input::Letter(Letter::from_char('a').unwrap()), Instant::now());
        app.handle_input(Input::Submit, Instant::now());
        assert!(app.session().is_none());
        assert!(app.notification().is_none());
    }

    #[test]
    fn ready_lists_start_a_game() {
        let app = ready_app();
        assert!(app.is_ready());
        assert_eq!(app.session().unwrap().target().text(), "kitob");
        assert!(app.status_line().is_none());
    }

    #[test]
    fn short_guess_notifies_and_expires() {
        let mut app = ready_app();
        let now = Instant::now();
        type_word(&mut app, "kit", now);
        app.handle_input(Input::Submit, now);

        let note = app.notification().unwrap();
        assert_eq!(note.text, messages::WRONG_LENGTH);
        assert_eq!(note.style, MessageStyle::Error);
        assert!(app.take_bell());
        assert!(!app.take_bell());
        assert_eq!(app.session().unwrap().current().len(), 3);

        app.tick(now + Duration::from_millis(1999));
        assert!(app.notification().is_some());
        app.tick(now + Duration::from_millis(2000));
        assert!(app.notification().is_none());
    }

    #[test]
    fn unknown_word_notifies() {
        let mut app = ready_app();
        let now = Instant::now();
        type_word(&mut app, "bodom", now);
        app.handle_input(Input::Submit, now);
        assert_eq!(app.notification().unwrap().text, messages::NOT_IN_LIST);
    }

    #[test]
    fn win_shows_success() {
        let mut app = ready_app();
        let now = Instant::now();
        type_word(&mut app, "kitob", now);
        app.handle_input(Input::Submit, now);

        let note = app.notification().unwrap();
        assert_eq!(note.text, messages::WON);
        assert_eq!(note.style, MessageStyle::Success);
        assert_eq!(app.session().unwrap().status(), GameStatus::Won);
    }

    #[test]
    fn loss_reveals_target() {
        let mut app = ready_app();
        let now = Instant::now();
        for word in ["zabon", "bahor", "qalam", "daryo", "inson", "vatan"] {
            type_word(&mut app, word, now);
            app.handle_input(Input::Submit, now);
        }
        assert_eq!(app.notification().unwrap().text, "❌ Tugadi! So‘z: kitob");

        // Further submissions are ignored without a message
        app.notification = None;
        app.handle_input(Input::Submit, now);
        assert!(app.notification().is_none());
    }

    #[test]
    fn tick_key_combines() {
        let mut app = ready_app();
        let now = Instant::now();
        type_word(&mut app, "g", now);
        app.handle_input(Input::Tick, now);
        assert_eq!(app.session().unwrap().current(), &[Letter::G_TICK]);
    }

    #[test]
    fn bell_can_be_disabled() {
        let lists = WordLists::new(words_from_slice(&["kitob"]), Vec::new()).unwrap();
        let ui = UiConfig {
            bell: false,
            ..UiConfig::default()
        };
        let mut app = App::new(WordListLoader::ready(lists), &ui);
        app.tick(Instant::now());
        app.handle_input(Input::Submit, Instant::now());
        assert!(app.notification().is_some());
        assert!(!app.take_bell());
    }

    #[test]
    fn toggles_and_quit() {
        let mut app = ready_app();
        let now = Instant::now();

        app.handle_input(Input::ToggleHelp, now);
        assert!(app.show_help);
        app.handle_input(Input::ToggleTheme, now);
        assert_eq!(app.theme, Theme::Light);
        app.handle_input(Input::Quit, now);
        assert!(app.should_quit);
    }

    #[test]
    fn new_game_resets_board() {
        let mut app = ready_app();
        let now = Instant::now();
        type_word(&mut app, "zabon", now);
        app.handle_input(Input::Submit, now);
        assert_eq!(app.session().unwrap().guesses().len(), 1);

        app.handle_input(Input::NewGame, now);
        assert!(app.session().unwrap().guesses().is_empty());
    }
}
