//! Terminal output formatting
//!
//! Display utilities for line mode and the one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_report, print_score_report};
