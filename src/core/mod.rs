//! Core scoring rules for Scrabble Rush
//!
//! This module contains the pure, deterministic pieces of the game: letter values,
//! word validation and the speed bonus. Nothing here knows about timers or terminals.

mod bonus;
mod letters;
mod validator;

pub use bonus::{ScoreBreakdown, time_bonus};
pub use letters::{LETTER_VALUES, letter_value, score};
pub use validator::{ValidationOutcome, validate};
