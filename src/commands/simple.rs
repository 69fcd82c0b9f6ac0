//! Simple line-mode game
//!
//! Plays the same timed rounds without the TUI: type a word and press Enter.
//! `:quit` ends the game, `:reset` starts over.

use crate::config::GameConfig;
use crate::core::{ScoreBreakdown, ValidationOutcome};
use crate::dictionary::Dictionary;
use crate::game::{GameObserver, RoundController, RoundPhase, Submission};
use crate::output::display;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Seconds-left values announced while a round runs
const ANNOUNCED_TICKS: [u32; 5] = [10, 5, 3, 2, 1];

/// Prints controller notifications as they happen
#[derive(Debug, Default)]
pub struct ConsoleObserver {
    round_seconds: u32,
}

impl ConsoleObserver {
    #[must_use]
    pub const fn new(round_seconds: u32) -> Self {
        Self { round_seconds }
    }
}

impl GameObserver for ConsoleObserver {
    fn on_round_start(&mut self, round: u32, max_rounds: u32, required_length: usize) {
        display::print_round_start(round, max_rounds, required_length, self.round_seconds);
    }

    fn on_tick(&mut self, remaining: u32) {
        if ANNOUNCED_TICKS.contains(&remaining) {
            display::print_tick(remaining, self.round_seconds);
        }
    }

    fn on_validation_failure(&mut self, outcome: ValidationOutcome) {
        display::print_rejection(outcome);
    }

    fn on_timeout(&mut self, _round: u32) {
        display::print_timeout();
    }

    fn on_round_scored(&mut self, breakdown: ScoreBreakdown, total: u32) {
        display::print_round_scored(breakdown, total);
    }

    fn on_game_over(&mut self, total: u32) {
        display::print_final_score(total);
    }

    fn on_game_reset(&mut self, _max_rounds: u32) {
        display::print_reset();
    }
}

/// Run the simple line-mode game
///
/// Returns the final score.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or reading stdin fails.
pub async fn run_simple<D: Dictionary>(config: GameConfig, dictionary: D) -> Result<u32> {
    display::print_banner();

    let observer = ConsoleObserver::new(config.round_seconds);
    let (mut controller, mut events) = RoundController::new(config, dictionary, observer)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    controller.start_round().await?;

    while controller.phase() != RoundPhase::GameOver {
        tokio::select! {
            Some(event) = events.recv() => {
                controller.handle_event(event).await;
            }
            line = lines.next_line() => {
                let Some(input) = line? else {
                    // stdin closed
                    controller.quit();
                    continue;
                };

                match input.trim() {
                    ":quit" | ":q" => controller.quit(),
                    ":reset" | ":r" => controller.reset().await?,
                    "" => {}
                    word => match controller.submit(word) {
                        Ok(Submission::Late) => display::print_late(),
                        Ok(Submission::Scored(_) | Submission::Rejected(_)) => {}
                        Err(e) => {
                            tracing::debug!("Ignored input between rounds: {e}");
                            display::print_wait();
                        }
                    },
                }
            }
        }
    }

    controller.shutdown().await;
    Ok(controller.session().total_score())
}
