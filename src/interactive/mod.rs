//! Interactive TUI front end

mod app;
mod rendering;

pub use app::{App, HistoryEntry, Message, MessageStyle, Scoreboard, run_tui};
