//! Score and round bookkeeping

use crate::core::ScoreBreakdown;

/// Running totals for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    total_score: u32,
    current_round: u32,
    max_rounds: u32,
}

impl GameSession {
    #[must_use]
    pub const fn new(max_rounds: u32) -> Self {
        Self {
            total_score: 0,
            current_round: 0,
            max_rounds,
        }
    }

    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    #[inline]
    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.current_round
    }

    #[inline]
    #[must_use]
    pub const fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// All rounds have been played
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.current_round >= self.max_rounds
    }

    /// Advance the round counter, returning the new round number
    ///
    /// Returns `None` once every round has been played.
    pub fn begin_round(&mut self) -> Option<u32> {
        if self.is_complete() {
            return None;
        }
        self.current_round += 1;
        Some(self.current_round)
    }

    /// Add an accepted word's points, returning the new total
    pub fn record(&mut self, breakdown: ScoreBreakdown) -> u32 {
        self.total_score += breakdown.round_total();
        self.total_score
    }

    pub fn reset(&mut self) {
        self.total_score = 0;
        self.current_round = 0;
    }
}

/// Per-round values owned by the controller while the round lasts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    number: u32,
    required_length: usize,
    round_seconds: u32,
    remaining_seconds: u32,
}

impl RoundState {
    #[must_use]
    pub const fn new(number: u32, required_length: usize, round_seconds: u32) -> Self {
        Self {
            number,
            required_length,
            round_seconds,
            remaining_seconds: round_seconds,
        }
    }

    #[inline]
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[inline]
    #[must_use]
    pub const fn required_length(&self) -> usize {
        self.required_length
    }

    /// Last remaining value reported by the timer
    #[inline]
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Seconds used so far, derived from the last reported tick
    #[inline]
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u32 {
        self.round_seconds.saturating_sub(self.remaining_seconds)
    }

    pub fn record_tick(&mut self, remaining: u32) {
        self.remaining_seconds = remaining.min(self.round_seconds);
    }
}
