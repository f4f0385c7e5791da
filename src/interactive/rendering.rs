//! TUI rendering with ratatui
//!
//! Tile board, on-screen keyboard, and the score-card popup.

use super::app::App;
use crate::core::Verdict;
use crate::engine::{GameState, KeyStatus, MAX_ATTEMPTS, keyboard_status};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board + banner
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_score_card {
        render_score_card(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

fn tile_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default().bg(Color::Green).fg(Color::Black),
        Verdict::Present => Style::default().bg(Color::Yellow).fg(Color::Black),
        Verdict::Absent => Style::default().bg(Color::DarkGray).fg(Color::White),
    }
}

fn board_row<'a>(app: &App, state: &GameState, attempt: usize) -> Line<'a> {
    let mut spans: Vec<Span> = Vec::with_capacity(11);
    spans.push(Span::raw("   "));

    if let (Some(letters), Some(verdicts)) = (
        state.row_letters(attempt),
        state.row_verdicts(attempt, app.engine.policy()),
    ) {
        for (letter, verdict) in letters.iter().zip(verdicts.iter()) {
            spans.push(Span::styled(
                format!(" {} ", letter.to_ascii_uppercase()),
                tile_style(*verdict),
            ));
            spans.push(Span::raw(" "));
        }
        return Line::from(spans);
    }

    let rejected = state.invalid_attempt() == Some(attempt);
    let typed = state.buffer(attempt);
    for position in 0..crate::core::WORD_LEN {
        let (text, style) = match typed.get(position) {
            Some(letter) => {
                let style = if rejected {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                (format!(" {} ", letter.to_ascii_uppercase()), style)
            }
            None => (" _ ".to_string(), Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let Some(state) = app.engine.state() else {
        let placeholder = Paragraph::new("Press 'n' to start a game")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(placeholder, area);
        return;
    };

    let mut lines: Vec<Line> = vec![Line::default()];
    for attempt in 0..MAX_ATTEMPTS {
        lines.push(board_row(app, state, attempt));
        lines.push(Line::default());
    }
    lines.push(banner(state));

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn banner<'a>(state: &GameState) -> Line<'a> {
    if state.won() {
        Line::from(Span::styled(
            "You won!  (n: new game, q: quit)",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else if state.over() {
        Line::from(vec![
            Span::styled(
                "Better luck next time! The word was ",
                Style::default().fg(Color::Red),
            ),
            Span::styled(
                state.target().text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::default()
    }
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::default().bg(Color::Green).fg(Color::Black),
        KeyStatus::Present => Style::default().bg(Color::Yellow).fg(Color::Black),
        KeyStatus::Absent => Style::default().bg(Color::DarkGray).fg(Color::Black),
        KeyStatus::Unused => Style::default(),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let statuses = app
        .engine
        .state()
        .map(keyboard_status)
        .unwrap_or_default();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans: Vec<Span> = Vec::with_capacity(row.len() * 2);
            for letter in row.chars() {
                let status = statuses.get(&letter).copied().unwrap_or_default();
                spans.push(Span::styled(
                    format!("{}", letter.to_ascii_uppercase()),
                    key_style(status),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let over = app.engine.state().is_some_and(GameState::over);

    let (text, style) = if app.shaking() {
        (
            "Not a word!".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if over {
        (
            "n: new game · Tab: scores · q: quit".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            "Type a guess · Enter: submit · Backspace: delete · Tab: scores · Esc: quit"
                .to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}

fn render_score_card(f: &mut Frame, app: &App) {
    let area = centered_rect(46, 16, f.area());
    f.render_widget(Clear, area);

    let summary = app.engine.summary();
    let tallest = summary.tallest_bucket();

    let mut lines = vec![
        Line::default(),
        Line::from(format!(
            "Played {:>4}    Win % {:>3}",
            summary.played, summary.win_pct
        )),
        Line::from(format!(
            "Streak {:>4}    Best  {:>3}",
            summary.current_streak, summary.max_streak
        )),
        Line::default(),
    ];

    let max_count = tallest.map_or(0, |bucket| summary.distribution[bucket - 1]);
    for guess_count in 1..=MAX_ATTEMPTS {
        let count = summary.distribution[guess_count - 1];
        let bar = create_progress_bar(count as f64, max_count as f64, 20);
        let style = if Some(guess_count) == tallest {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::raw(format!(" {guess_count} ")),
            Span::styled(bar, style),
            Span::raw(format!(" {count}")),
        ]));
    }

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Game scores (Esc to close) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(card, area);
}

/// Fixed-size rect centered in `area`, clamped to fit
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
