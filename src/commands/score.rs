//! Word scoring command
//!
//! Shows how a word would score: letter by letter, and at every bonus tier.

use crate::core::{ScoreBreakdown, letter_value};

/// Elapsed times representative of each bonus tier
const TIER_SAMPLES: [u32; 4] = [0, 6, 11, 16];

/// Result of scoring a word outside a game
pub struct ScoreReport {
    pub word: String,
    pub letters: Vec<(char, u32)>,
    pub base_score: u32,
    /// `(elapsed seconds, breakdown)` for one sample per bonus tier
    pub tiers: Vec<(u32, ScoreBreakdown)>,
}

/// Score a word letter by letter
///
/// # Errors
///
/// Returns an error if the word is empty.
pub fn score_word(word: &str) -> Result<ScoreReport, String> {
    let word = word.trim();
    if word.is_empty() {
        return Err("Nothing to score: the word is empty".to_string());
    }

    let letters: Vec<(char, u32)> = word
        .chars()
        .map(|c| (c.to_ascii_uppercase(), letter_value(c)))
        .collect();

    let tiers = TIER_SAMPLES
        .iter()
        .map(|&elapsed| (elapsed, ScoreBreakdown::for_word(word, elapsed)))
        .collect();

    Ok(ScoreReport {
        word: word.to_string(),
        base_score: letters.iter().map(|&(_, value)| value).sum(),
        letters,
        tiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cabbage_report() {
        let report = score_word("cabbage").unwrap();
        assert_eq!(report.base_score, 14);
        assert_eq!(report.letters[0], ('C', 3));
        assert_eq!(report.letters.len(), 7);

        let totals: Vec<u32> = report.tiers.iter().map(|(_, b)| b.round_total()).collect();
        assert_eq!(totals, [34, 24, 19, 14]);
    }

    #[test]
    fn non_letters_score_zero_in_breakdown() {
        let report = score_word("a-b").unwrap();
        assert_eq!(report.letters, [('A', 1), ('-', 0), ('B', 3)]);
        assert_eq!(report.base_score, 4);
    }

    #[test]
    fn empty_word_is_an_error() {
        assert!(score_word("   ").is_err());
    }
}
