//! Formatting utilities for terminal output

use crate::core::ScoreBreakdown;

/// Round result as shown to the player, e.g. `Score: 14 (Bonus: 5)`
#[must_use]
pub fn format_breakdown(breakdown: ScoreBreakdown) -> String {
    format!(
        "Score: {} (Bonus: {})",
        breakdown.base_score, breakdown.time_bonus
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }
    let filled = (value.min(max) as usize * width) / max as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Human label for the bonus tier an elapsed time falls into
#[must_use]
pub const fn bonus_tier_label(elapsed_seconds: u32) -> &'static str {
    match elapsed_seconds {
        0..=5 => "0-5 s",
        6..=10 => "6-10 s",
        11..=15 => "11-15 s",
        _ => "over 15 s",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_text() {
        let breakdown = ScoreBreakdown {
            base_score: 14,
            time_bonus: 5,
        };
        assert_eq!(format_breakdown(breakdown), "Score: 14 (Bonus: 5)");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 15, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(15, 15, 10), "██████████");
        assert_eq!(create_progress_bar(40, 15, 10), "██████████");
    }

    #[test]
    fn progress_bar_partial() {
        assert_eq!(create_progress_bar(6, 12, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }

    #[test]
    fn tier_labels() {
        assert_eq!(bonus_tier_label(5), "0-5 s");
        assert_eq!(bonus_tier_label(6), "6-10 s");
        assert_eq!(bonus_tier_label(15), "11-15 s");
        assert_eq!(bonus_tier_label(16), "over 15 s");
    }
}
