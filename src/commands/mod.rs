//! Command implementations

pub mod check;
pub mod score;
pub mod simple;

pub use check::{CheckReport, check_word};
pub use score::{ScoreReport, score_word};
pub use simple::{ConsoleObserver, run_simple};
