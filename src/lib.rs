//! Scrabble Rush
//!
//! A timed word drill: each round asks for a word of a given length, scores it with
//! Scrabble letter values and adds a bonus for answering quickly.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabble_rush::core::{ScoreBreakdown, score, time_bonus};
//!
//! assert_eq!(score("cabbage"), 14);
//! assert_eq!(time_bonus(8), 10);
//!
//! let breakdown = ScoreBreakdown::for_word("cabbage", 8);
//! assert_eq!(breakdown.round_total(), 24);
//! ```

// Scoring rules
pub mod core;

// Word lookup
pub mod dictionary;

// Game tunables
pub mod config;

// Rounds, timer and controller
pub mod game;

// Log file setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
