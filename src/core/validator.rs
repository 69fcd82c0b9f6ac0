//! Submission validation
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. every character is alphabetic
//! 2. the character count matches the round's required length
//! 3. the lowercased word is in the dictionary
//!
//! A short string full of digits therefore reports the format problem, not the length.

use crate::dictionary::Dictionary;
use std::fmt;

/// Result of validating one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    NotAlphabetic,
    WrongLength(usize),
    NotInDictionary,
}

impl ValidationOutcome {
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid word."),
            Self::NotAlphabetic => write!(f, "Please enter only alphabetic characters."),
            Self::WrongLength(expected) => {
                write!(f, "Word must be exactly {expected} letters long.")
            }
            Self::NotInDictionary => write!(f, "The word is not in the dictionary."),
        }
    }
}

/// Validate `word` against the round's `required_length` and a dictionary
///
/// # Examples
/// ```
/// use scrabble_rush::core::{ValidationOutcome, validate};
/// use scrabble_rush::dictionary::WordSet;
///
/// let dictionary = WordSet::from_words(["apple"]);
/// assert_eq!(validate("Apple", 5, &dictionary), ValidationOutcome::Valid);
/// assert_eq!(validate("1a", 5, &dictionary), ValidationOutcome::NotAlphabetic);
/// assert_eq!(validate("hi", 5, &dictionary), ValidationOutcome::WrongLength(5));
/// ```
pub fn validate<D: Dictionary + ?Sized>(
    word: &str,
    required_length: usize,
    dictionary: &D,
) -> ValidationOutcome {
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return ValidationOutcome::NotAlphabetic;
    }

    if word.chars().count() != required_length {
        return ValidationOutcome::WrongLength(required_length);
    }

    if !dictionary.contains(&word.to_lowercase()) {
        return ValidationOutcome::NotInDictionary;
    }

    ValidationOutcome::Valid
}
