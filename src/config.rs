//! Game configuration
//!
//! Defaults match the classic drill: 10 rounds of 15 seconds, words of 3 to 7 letters.
//! Environment variables override the defaults and command-line flags override both.

use std::env;
use std::time::Duration;

/// Rounds per game
pub const DEFAULT_MAX_ROUNDS: u32 = 10;
/// Countdown length of one round in seconds
pub const DEFAULT_ROUND_SECONDS: u32 = 15;
pub const DEFAULT_MIN_LENGTH: usize = 3;
pub const DEFAULT_MAX_LENGTH: usize = 7;

/// Errors from an inconsistent configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("A game needs at least one round")]
    NoRounds,

    #[error("Rounds must last at least one second")]
    NoTime,

    #[error("Word length must be at least 1, got {0}")]
    ZeroLength(usize),

    #[error("Minimum word length {min} exceeds maximum {max}")]
    InvertedLengths { min: usize, max: usize },
}

/// Tunables for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rounds: u32,
    pub round_seconds: u32,
    pub min_length: usize,
    pub max_length: usize,
    /// How long a scored round's result stays on screen before the next round
    pub scored_delay: Duration,
    /// How long "Time's up!" stays on screen before the next round
    pub timeout_delay: Duration,
    /// Seed for the word-length draw; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            round_seconds: DEFAULT_ROUND_SECONDS,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            scored_delay: Duration::from_secs(2),
            timeout_delay: Duration::from_secs(1),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SCRABBLE_MAX_ROUNDS` - rounds per game (default: 10)
    /// - `SCRABBLE_ROUND_SECONDS` - seconds per round (default: 15)
    /// - `SCRABBLE_MIN_LENGTH` - shortest required word (default: 3)
    /// - `SCRABBLE_MAX_LENGTH` - longest required word (default: 7)
    /// - `SCRABBLE_SEED` - fixed RNG seed for reproducible games
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(rounds) = read_env("SCRABBLE_MAX_ROUNDS") {
            config.max_rounds = rounds;
        }
        if let Some(seconds) = read_env("SCRABBLE_ROUND_SECONDS") {
            config.round_seconds = seconds;
        }
        if let Some(min) = read_env("SCRABBLE_MIN_LENGTH") {
            config.min_length = min;
        }
        if let Some(max) = read_env("SCRABBLE_MAX_LENGTH") {
            config.max_length = max;
        }
        config.seed = read_env("SCRABBLE_SEED");

        config
    }

    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub const fn with_round_seconds(mut self, round_seconds: u32) -> Self {
        self.round_seconds = round_seconds;
        self
    }

    #[must_use]
    pub const fn with_lengths(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration can actually run a game
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.round_seconds == 0 {
            return Err(ConfigError::NoTime);
        }
        if self.min_length == 0 {
            return Err(ConfigError::ZeroLength(self.min_length));
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::InvertedLengths {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.round_seconds, 15);
        assert_eq!((config.min_length, config.max_length), (3, 7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_rounds_and_time() {
        assert_eq!(
            GameConfig::default().with_max_rounds(0).validate(),
            Err(ConfigError::NoRounds)
        );
        assert_eq!(
            GameConfig::default().with_round_seconds(0).validate(),
            Err(ConfigError::NoTime)
        );
    }

    #[test]
    fn rejects_bad_length_ranges() {
        assert_eq!(
            GameConfig::default().with_lengths(0, 4).validate(),
            Err(ConfigError::ZeroLength(0))
        );
        assert_eq!(
            GameConfig::default().with_lengths(6, 4).validate(),
            Err(ConfigError::InvertedLengths { min: 6, max: 4 })
        );
        assert!(GameConfig::default().with_lengths(5, 5).validate().is_ok());
    }
}
