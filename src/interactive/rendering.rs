//! TUI rendering with ratatui
//!
//! Draws the 6×5 board, the tinted virtual keyboard, the notification line
//! and the help panel.

use super::app::{App, MessageStyle};
use crate::config::Theme;
use crate::core::{Letter, MAX_GUESSES, Mark, WORD_LENGTH, parse_letters};
use crate::game::{KeyboardState, messages};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

/// On-screen keyboard layout
const KEY_ROWS: [&[&str]; 3] = [
    &["q", "o‘", "e", "r", "t", "y", "u", "i", "o", "p"],
    &["a", "s", "d", "f", "g", "h", "j", "k", "l", "g‘"],
    &["←", "z", "x", "v", "b", "n", "m", "↵"],
];

/// Colours for one theme
struct Palette {
    base: Style,
    border: Color,
    tile_text: Color,
    key: Style,
    correct: Color,
    present: Color,
    absent: Color,
}

impl Palette {
    const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                base: Style::new().fg(Color::White).bg(Color::Reset),
                border: Color::DarkGray,
                tile_text: Color::White,
                key: Style::new().fg(Color::Black).bg(Color::Gray),
                correct: Color::Green,
                present: Color::Yellow,
                absent: Color::DarkGray,
            },
            Theme::Light => Self {
                base: Style::new().fg(Color::Black).bg(Color::White),
                border: Color::Gray,
                tile_text: Color::Black,
                key: Style::new().fg(Color::Black).bg(Color::Gray),
                correct: Color::Green,
                present: Color::Yellow,
                absent: Color::DarkGray,
            },
        }
    }

    const fn mark_color(&self, mark: Mark) -> Color {
        match mark {
            Mark::Correct => self.correct,
            Mark::Present => self.present,
            Mark::Absent => self.absent,
        }
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);
    f.render_widget(Block::default().style(palette.base), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                     // Header
            Constraint::Length(1),                                     // Notification
            Constraint::Length(TILE_HEIGHT * MAX_GUESSES as u16 + 1), // Board
            Constraint::Length(5),                                     // Keyboard
            Constraint::Min(1),                                        // Help line
        ])
        .split(f.area());

    render_header(f, &palette, chunks[0]);
    render_notification(f, app, chunks[1]);
    render_board(f, app, &palette, chunks[2]);
    render_keyboard(f, app, &palette, chunks[3]);
    render_status(f, chunks[4]);

    if app.show_help {
        render_help(f, &palette, f.area());
    }
}

fn render_header(f: &mut Frame, palette: &Palette, area: Rect) {
    let header = Paragraph::new("Wordle.uz")
        .style(palette.base.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        );
    f.render_widget(header, area);
}

fn render_notification(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(text) = app.status_line() {
        Line::styled(text, Style::default().fg(Color::DarkGray))
    } else if let Some(note) = app.notification() {
        let color = match note.style {
            MessageStyle::Success => Color::Green,
            MessageStyle::Error => Color::Red,
        };
        Line::styled(
            note.text.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        Line::default()
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Letters and marks for every tile, row by row
fn board_rows(app: &App) -> Vec<[(Option<Letter>, Option<Mark>); WORD_LENGTH]> {
    let mut rows = vec![[(None, None); WORD_LENGTH]; MAX_GUESSES];

    let Some(session) = app.session() else {
        return rows;
    };

    for (row, guess) in rows.iter_mut().zip(session.guesses()) {
        for (tile, (&letter, &mark)) in row
            .iter_mut()
            .zip(guess.word.letters().iter().zip(guess.verdict.marks()))
        {
            *tile = (Some(letter), Some(mark));
        }
    }

    if let Some(row) = rows.get_mut(session.guesses().len()) {
        for (tile, &letter) in row.iter_mut().zip(session.current()) {
            *tile = (Some(letter), None);
        }
    }

    rows
}

fn render_board(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let board_width = TILE_WIDTH * WORD_LENGTH as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(board_width),
            Constraint::Fill(1),
        ])
        .split(area);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TILE_HEIGHT); MAX_GUESSES])
        .split(columns[1]);

    for (row, row_area) in board_rows(app).iter().zip(row_areas.iter()) {
        let tile_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(TILE_WIDTH); WORD_LENGTH])
            .split(*row_area);

        for (&(letter, mark), tile_area) in row.iter().zip(tile_areas.iter()) {
            render_tile(f, palette, letter, mark, *tile_area);
        }
    }
}

fn render_tile(
    f: &mut Frame,
    palette: &Palette,
    letter: Option<Letter>,
    mark: Option<Mark>,
    area: Rect,
) {
    let text = letter.map(|l| l.as_str().to_uppercase()).unwrap_or_default();

    let (style, border) = match mark {
        Some(mark) => {
            let color = palette.mark_color(mark);
            (
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(color).bg(color),
            )
        }
        None => {
            // Typed but unscored tiles get a brighter border
            let border = if letter.is_some() {
                palette.tile_text
            } else {
                palette.border
            };
            (
                Style::default()
                    .fg(palette.tile_text)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(border),
            )
        }
    };

    let tile = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    f.render_widget(tile, area);
}

/// Alphabet letter printed on a key, if the key is a letter
fn key_letter(label: &str) -> Option<Letter> {
    match parse_letters(label).ok()?.as_slice() {
        [letter] => Some(*letter),
        _ => None,
    }
}

fn key_span<'a>(label: &'a str, hints: Option<&KeyboardState>, palette: &Palette) -> Span<'a> {
    let mark = key_letter(label).and_then(|l| hints.and_then(|h| h.mark_of(l)));
    let style = match mark {
        Some(mark) => Style::default()
            .fg(Color::Black)
            .bg(palette.mark_color(mark))
            .add_modifier(Modifier::BOLD),
        None => palette.key,
    };
    Span::styled(format!(" {label} "), style)
}

fn render_keyboard(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let hints = app.session().map(|s| s.keyboard());

    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, label) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(key_span(label, hints, palette));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(palette.border)),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: yuborish | Backspace: o‘chirish | ?: yordam | Tab: mavzu | Ctrl+N: yangi o‘yin | Esc: chiqish",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true });
    f.render_widget(help, area);
}

fn render_help(f: &mut Frame, palette: &Palette, area: Rect) {
    let popup = centered_rect(60, 14, area);

    let sample = |color: Color| {
        Span::styled(
            " S ",
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    };

    let content = vec![
        Line::from(messages::HELP_INTRO),
        Line::default(),
        Line::from(vec![
            sample(palette.correct),
            Span::raw(format!(" - {}", messages::HELP_CORRECT)),
        ]),
        Line::from(vec![
            sample(palette.present),
            Span::raw(format!(" - {}", messages::HELP_PRESENT)),
        ]),
        Line::from(vec![
            sample(palette.absent),
            Span::raw(format!(" - {}", messages::HELP_ABSENT)),
        ]),
        Line::default(),
        Line::styled(
            "o‘ = Shift+O yoki o + '   g‘ = Shift+G yoki g + '",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let panel = Paragraph::new(content)
        .style(palette.base)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", messages::HELP_TITLE))
                .title_bottom(" ? ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );

    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}

/// A `width`×`height` rectangle centred in `area`, clipped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
