//! TUI application state and logic

use crate::core::{ScoreBreakdown, ValidationOutcome};
use crate::dictionary::Dictionary;
use crate::game::{GameEvents, GameObserver, RoundController, RoundPhase, Submission};
use crate::output::formatters::format_breakdown;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::time::{self, Duration};

const FRAME_INTERVAL_MS: u64 = 16;
const MAX_INPUT_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// One accepted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub round: u32,
    pub word: String,
    pub breakdown: ScoreBreakdown,
}

/// View model fed by the controller's notifications
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub round: u32,
    pub max_rounds: u32,
    pub required_length: Option<usize>,
    pub remaining: u32,
    pub round_seconds: u32,
    pub total: u32,
    pub status: Option<Message>,
    pub final_score: Option<u32>,
}

impl Scoreboard {
    #[must_use]
    pub const fn new(max_rounds: u32, round_seconds: u32) -> Self {
        Self {
            round: 0,
            max_rounds,
            required_length: None,
            remaining: round_seconds,
            round_seconds,
            total: 0,
            status: None,
            final_score: None,
        }
    }

    fn set_status(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.status = Some(Message {
            text: text.into(),
            style,
        });
    }
}

impl GameObserver for Scoreboard {
    fn on_round_start(&mut self, round: u32, max_rounds: u32, required_length: usize) {
        self.round = round;
        self.max_rounds = max_rounds;
        self.required_length = Some(required_length);
        self.remaining = self.round_seconds;
        self.status = None;
        self.final_score = None;
    }

    fn on_tick(&mut self, remaining: u32) {
        self.remaining = remaining;
    }

    fn on_validation_failure(&mut self, outcome: ValidationOutcome) {
        self.set_status(outcome.to_string(), MessageStyle::Error);
    }

    fn on_timeout(&mut self, _round: u32) {
        self.remaining = 0;
        self.set_status("Time's up!", MessageStyle::Error);
    }

    fn on_round_scored(&mut self, breakdown: ScoreBreakdown, total: u32) {
        self.total = total;
        self.set_status(format_breakdown(breakdown), MessageStyle::Success);
    }

    fn on_game_over(&mut self, total: u32) {
        self.total = total;
        self.final_score = Some(total);
    }

    fn on_game_reset(&mut self, max_rounds: u32) {
        *self = Self::new(max_rounds, self.round_seconds);
    }
}

/// Application state
pub struct App<D: Dictionary> {
    pub controller: RoundController<D, Scoreboard>,
    pub input_buffer: String,
    pub history: Vec<HistoryEntry>,
    pub should_quit: bool,
}

impl<D: Dictionary> App<D> {
    #[must_use]
    pub fn new(controller: RoundController<D, Scoreboard>) -> Self {
        Self {
            controller,
            input_buffer: String::new(),
            history: Vec::new(),
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn scoreboard(&self) -> &Scoreboard {
        self.controller.observer()
    }

    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.controller.phase()
    }

    /// Submit the typed word to the controller
    ///
    /// The buffer is kept on rejection so the player can fix a typo.
    pub fn submit_input(&mut self) {
        if self.phase() != RoundPhase::RoundActive {
            return;
        }

        let word = self.input_buffer.trim().to_string();
        match self.controller.submit(&word) {
            Ok(Submission::Scored(breakdown)) => {
                self.history.push(HistoryEntry {
                    round: self.controller.session().current_round(),
                    word,
                    breakdown,
                });
                self.input_buffer.clear();
            }
            Ok(Submission::Rejected(_)) => {}
            Ok(Submission::Late) => self.input_buffer.clear(),
            Err(e) => tracing::warn!("Submission refused: {e}"),
        }
    }

    /// Start a brand new game
    ///
    /// # Errors
    ///
    /// Propagates controller contract violations.
    pub async fn restart(&mut self) -> Result<()> {
        self.history.clear();
        self.input_buffer.clear();
        self.controller.reset().await?;
        Ok(())
    }

    pub fn quit_game(&mut self) {
        self.input_buffer.clear();
        self.controller.quit();
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        if self.phase() == RoundPhase::GameOver {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r') => self.restart().await?,
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit_game(),
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
        Ok(())
    }

    async fn handle_terminal_input(&mut self) -> Result<()> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key).await?;
                }
            }
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<D: Dictionary>(mut app: App<D>, mut events: GameEvents) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app, &mut events).await;
    app.controller.shutdown().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(total) = app.scoreboard().final_score {
        println!("Total Score: {total}");
    }

    res
}

async fn run_app<B, D>(
    terminal: &mut Terminal<B>,
    app: &mut App<D>,
    events: &mut GameEvents,
) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
{
    app.controller.start_round().await?;

    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        tokio::select! {
            Some(event) = events.recv() => {
                app.controller.handle_event(event).await;
            }
            () = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                app.handle_terminal_input().await?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
