//! Speed bonus tiers and per-round score breakdown

use super::letters::score;

/// Bonus awarded for the number of seconds taken to find a valid word
///
/// | Elapsed | Bonus |
/// |---------|-------|
/// | 0-5     | 20    |
/// | 6-10    | 10    |
/// | 11-15   | 5     |
/// | > 15    | 0     |
///
/// Upper edges are inclusive: exactly 5 seconds still earns 20.
#[must_use]
pub const fn time_bonus(elapsed_seconds: u32) -> u32 {
    match elapsed_seconds {
        0..=5 => 20,
        6..=10 => 10,
        11..=15 => 5,
        _ => 0,
    }
}

/// Points earned by a single accepted word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Sum of letter values
    pub base_score: u32,
    /// Speed bonus from [`time_bonus`]
    pub time_bonus: u32,
}

impl ScoreBreakdown {
    /// Score `word` as if it was accepted after `elapsed_seconds`
    ///
    /// # Examples
    /// ```
    /// use scrabble_rush::core::ScoreBreakdown;
    ///
    /// let breakdown = ScoreBreakdown::for_word("cabbage", 11);
    /// assert_eq!(breakdown.base_score, 14);
    /// assert_eq!(breakdown.time_bonus, 5);
    /// assert_eq!(breakdown.round_total(), 19);
    /// ```
    #[must_use]
    pub fn for_word(word: &str, elapsed_seconds: u32) -> Self {
        Self {
            base_score: score(word),
            time_bonus: time_bonus(elapsed_seconds),
        }
    }

    #[inline]
    #[must_use]
    pub const fn round_total(self) -> u32 {
        self.base_score + self.time_bonus
    }
}
