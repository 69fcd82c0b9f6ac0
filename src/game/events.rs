//! Events flowing into the controller and notifications flowing out of it

use crate::core::{ScoreBreakdown, ValidationOutcome};
use tokio::sync::mpsc;

/// Identifies one countdown run
///
/// Bumped every time a round starts. Events carrying an older epoch belong to a
/// cancelled or superseded timer and are dropped.
pub type Epoch = u64;

/// Timer and scheduler output consumed by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// One second passed; `remaining` seconds are left
    Tick { epoch: Epoch, remaining: u32 },
    /// The countdown reached zero without being cancelled
    Expired { epoch: Epoch },
    /// The result display delay is over; move on to the next round
    Advance { epoch: Epoch },
}

impl GameEvent {
    #[must_use]
    pub const fn epoch(self) -> Epoch {
        match self {
            Self::Tick { epoch, .. } | Self::Expired { epoch } | Self::Advance { epoch } => epoch,
        }
    }
}

pub type EventSender = mpsc::UnboundedSender<GameEvent>;

/// Receiving end the host loop drains
pub type GameEvents = mpsc::UnboundedReceiver<GameEvent>;

/// Presentation callbacks
///
/// Every method defaults to a no-op so front ends only implement what they show.
pub trait GameObserver {
    fn on_round_start(&mut self, _round: u32, _max_rounds: u32, _required_length: usize) {}

    fn on_tick(&mut self, _remaining: u32) {}

    fn on_validation_failure(&mut self, _outcome: ValidationOutcome) {}

    fn on_timeout(&mut self, _round: u32) {}

    fn on_round_scored(&mut self, _breakdown: ScoreBreakdown, _total: u32) {}

    fn on_game_over(&mut self, _total: u32) {}

    /// The session was zeroed; a fresh round one follows
    fn on_game_reset(&mut self, _max_rounds: u32) {}
}

impl GameObserver for () {}
