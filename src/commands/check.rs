//! Word validation command
//!
//! Runs one submission through the same checks a round would, without the clock.

use crate::core::{ValidationOutcome, score, validate};
use crate::dictionary::Dictionary;

/// Result of checking a word against a required length
pub struct CheckReport {
    pub word: String,
    pub required_length: usize,
    pub outcome: ValidationOutcome,
    /// Letter score when the word is valid
    pub base_score: Option<u32>,
}

/// Validate a word as if it was submitted in a round asking for `required_length`
///
/// # Errors
///
/// Returns an error if `required_length` is zero.
pub fn check_word<D: Dictionary + ?Sized>(
    word: &str,
    required_length: usize,
    dictionary: &D,
) -> Result<CheckReport, String> {
    if required_length == 0 {
        return Err("Required length must be at least 1".to_string());
    }

    let word = word.trim();
    let outcome = validate(word, required_length, dictionary);

    Ok(CheckReport {
        word: word.to_string(),
        required_length,
        outcome,
        base_score: outcome.is_valid().then(|| score(word)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;

    #[test]
    fn valid_word_reports_score() {
        let dictionary = WordSet::embedded();
        let report = check_word("orange", 6, &dictionary).unwrap();
        assert_eq!(report.outcome, ValidationOutcome::Valid);
        assert_eq!(report.base_score, Some(7));
    }

    #[test]
    fn invalid_word_reports_reason() {
        let dictionary = WordSet::embedded();
        let report = check_word("quoxyz", 6, &dictionary).unwrap();
        assert_eq!(report.outcome, ValidationOutcome::NotInDictionary);
        assert_eq!(report.base_score, None);

        let report = check_word("1a", 5, &dictionary).unwrap();
        assert_eq!(report.outcome, ValidationOutcome::NotAlphabetic);
    }

    #[test]
    fn zero_length_is_an_error() {
        let dictionary = WordSet::embedded();
        assert!(check_word("cat", 0, &dictionary).is_err());
    }
}
