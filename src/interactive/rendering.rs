//! TUI rendering with ratatui
//!
//! Round panel with the countdown gauge on the left, accepted words and the letter
//! value card on the right.

use super::app::{App, MessageStyle};
use crate::core::{LETTER_VALUES, time_bonus};
use crate::dictionary::Dictionary;
use crate::game::RoundPhase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    if app.phase() == RoundPhase::GameOver {
        render_game_over(f, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Round panel
            Constraint::Percentage(40), // History and letter values
        ])
        .split(chunks[1]);

    render_round_panel(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SCRABBLE RUSH - Beat the Clock")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_round_panel<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Round info
            Constraint::Length(3), // Countdown
            Constraint::Length(3), // Status message
        ])
        .split(area);

    render_round_info(f, app, chunks[0]);
    render_countdown(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
}

fn render_round_info<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let board = app.scoreboard();

    let length_line = board.required_length.map_or_else(
        || Line::from("Get ready..."),
        |length| {
            Line::from(vec![
                Span::raw("Enter a word with exactly "),
                Span::styled(
                    length.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" letters"),
            ])
        },
    );

    let content = vec![
        Line::from(format!("Round: {}/{}", board.round, board.max_rounds)),
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                board.total.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        length_line,
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Round ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_countdown<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let board = app.scoreboard();
    let elapsed = board.round_seconds.saturating_sub(board.remaining);
    let bonus = time_bonus(elapsed);

    let color = match bonus {
        20 => Color::Green,
        10 => Color::Yellow,
        _ => Color::Red,
    };

    let ratio = if board.round_seconds == 0 {
        0.0
    } else {
        f64::from(board.remaining) / f64::from(board.round_seconds)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{} seconds | bonus now +{bonus}", board.remaining));

    f.render_widget(gauge, area);
}

fn render_message<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let (text, style) = app.scoreboard().status.as_ref().map_or_else(
        || (String::new(), Style::default()),
        |msg| {
            let color = match msg.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (
                msg.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        },
    );

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(message, area);
}

fn render_side_panel<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // History
            Constraint::Percentage(45), // Letter values
        ])
        .split(area);

    render_history(f, app, chunks[0]);
    render_letter_values(f, chunks[1]);
}

fn render_history<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            let content = format!(
                "{:>2}: {:<7} {:>3} +{:<2} = {}",
                entry.round,
                entry.word.to_uppercase(),
                entry.breakdown.base_score,
                entry.breakdown.time_bonus,
                entry.breakdown.round_total()
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" Words ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_letter_values(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = LETTER_VALUES
        .chunks(7)
        .enumerate()
        .map(|(row, values)| {
            let text: String = values
                .iter()
                .enumerate()
                .map(|(col, value)| {
                    let letter = char::from(b'A' + (row * 7 + col) as u8);
                    format!("{letter}{value:<3}")
                })
                .collect();
            Line::from(text)
        })
        .collect();

    let card = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(" Letter values ")
                .borders(Borders::ALL),
        );

    f.render_widget(card, area);
}

fn render_input<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let (title, color) = match app.phase() {
        RoundPhase::RoundActive => (" Your word | Enter to submit ", Color::Yellow),
        RoundPhase::RoundScored | RoundPhase::RoundTimedOut => {
            (" Next round coming up... ", Color::DarkGray)
        }
        RoundPhase::NotStarted | RoundPhase::GameOver => (" Waiting ", Color::DarkGray),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<D: Dictionary>(f: &mut Frame, app: &App<D>, area: Rect) {
    let help_text = format!(
        "Phase: {} | Enter: Submit | Esc: Quit | Ctrl-C: Exit",
        app.phase()
    );

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_game_over<D: Dictionary>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(f.area());

    let total = app.scoreboard().final_score.unwrap_or(app.scoreboard().total);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Total Score: {total}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} words accepted over {} rounds",
            app.history.len(),
            app.scoreboard().round
        )),
        Line::from(""),
        Line::from(Span::styled(
            "r: Play again | q: Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" 🏁 Game Over ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(paragraph, chunks[1]);
}
