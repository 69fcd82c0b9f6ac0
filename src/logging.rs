//! Log file setup
//!
//! The TUI owns the terminal, so logs go to `scrabble_rush.log` in a cache directory
//! instead of stderr. `RUST_LOG` refines the default `info` filter.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "scrabble_rush.log";

/// Install the global subscriber writing to `log_dir` (or the platform default)
///
/// Keep the returned guard alive for the whole program; dropping it flushes and
/// stops the background writer.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init(log_dir: Option<&Path>) -> Result<WorkerGuard> {
    let log_dir = log_dir.map_or_else(default_log_directory, Path::to_path_buf);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE).display());
    Ok(guard)
}

/// Platform-specific log directory
///
/// `SCRABBLE_LOG_DIR` wins when set.
#[must_use]
pub fn default_log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os("SCRABBLE_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Caches")
                .join("scrabble_rush")
                .join("logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join("scrabble_rush").join("logs");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".cache")
                .join("scrabble_rush")
                .join("logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local_appdata)
                .join("scrabble_rush")
                .join("logs");
        }
    }

    std::env::temp_dir().join("scrabble_rush").join("logs")
}
