//! Simple line-mode game
//!
//! The same game as the TUI, one guess per line on stdin.

use crate::core::{MAX_GUESSES, WordError, parse_letters};
use crate::game::{GameSession, messages};
use crate::output::formatters::tile_row;
use crate::wordlists::WordLists;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-mode game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(lists: &WordLists) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_lines(lists, &mut rand::rng(), stdin.lock(), &mut stdout).map_err(|e| e.to_string())
}

/// Play games reading guesses from `input` until it ends or the player stops
///
/// # Errors
///
/// Returns any I/O error from `input` or `out`.
pub fn play_lines<R, I, W>(lists: &WordLists, rng: &mut R, mut input: I, out: &mut W) -> io::Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n{}", "Wordle.uz".bright_green().bold())?;
    writeln!(out, "{}", messages::HELP_INTRO)?;
    writeln!(out, "o‘ va g‘ uchun o' va g' yozing. Chiqish: q\n")?;

    loop {
        let Some(mut session) = GameSession::start(lists, rng) else {
            return Ok(());
        };

        while !session.is_over() {
            let turn = session.guesses().len() + 1;
            let Some(line) = read_answer(&mut input, out, &format!("{turn}/{MAX_GUESSES}"))? else {
                writeln!(out, "\nXayr!")?;
                return Ok(());
            };
            if matches!(line.as_str(), "q" | "quit" | "chiqish") {
                writeln!(out, "Xayr!")?;
                return Ok(());
            }

            let letters = match parse_letters(&line) {
                Ok(letters) => letters,
                Err(WordError::InvalidCharacter(c)) => {
                    writeln!(out, "{}", format!("Noma’lum harf: {c}").red())?;
                    continue;
                }
                Err(e) => {
                    writeln!(out, "{}", e.to_string().red())?;
                    continue;
                }
            };

            match session.submit_letters(&letters, lists) {
                Ok(outcome) => {
                    if let Some(last) = session.guesses().last() {
                        writeln!(out, "   {}", tile_row(&last.word, last.verdict))?;
                    }
                    if let Some(text) = outcome.player_message() {
                        writeln!(out, "\n{}", text.bold())?;
                    }
                }
                Err(e) => {
                    if let Some(text) = e.player_message() {
                        writeln!(out, "{}", text.red())?;
                    }
                }
            }
        }

        let again = read_answer(&mut input, out, "Yana o‘ynaysizmi? (ha/yo‘q)")?;
        if !matches!(again.as_deref(), Some("ha" | "h" | "yes" | "y")) {
            writeln!(out, "Xayr!")?;
            return Ok(());
        }
        writeln!(out)?;
    }
}

/// Prompt and read one trimmed, lower-cased line; `None` at end of input
fn read_answer<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
