//! Round lifecycle: session bookkeeping, the countdown timer and the controller
//!
//! The timer runs as its own tokio task but never touches game state. It only sends
//! [`GameEvent`]s; the host loop feeds them back into [`RoundController::handle_event`]
//! on the same task that handles player input, so every state change is serialized.

mod controller;
mod events;
mod session;
mod timer;

pub use controller::{ControllerError, RoundController, RoundPhase, Submission};
pub use events::{Epoch, EventSender, GameEvent, GameEvents, GameObserver};
pub use session::{GameSession, RoundState};
pub use timer::{RoundTimer, TimerState};
