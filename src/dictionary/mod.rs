//! Dictionary capability and the bundled word list
//!
//! The game only ever asks one question of a dictionary: "is this lowercase word known?".
//! [`WordSet`] answers it from memory; any `Fn(&str) -> bool` works too, which keeps
//! tests free of file fixtures.

mod embedded;
pub mod loader;

use embedded::{WORDS, WORDS_COUNT};
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::ops::RangeInclusive;

/// Lookup service used by the word validator
pub trait Dictionary {
    /// Whether `word` (already lowercased) is a known word
    fn contains(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, word: &str) -> bool {
        self(word)
    }
}

/// Errors raised while building a dictionary
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to read word list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list {0} contains no usable words")]
    Empty(String),
}

/// In-memory set of lowercase words
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a set from any iterator of words, lowercasing each entry
    ///
    /// Blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let mut words = FxHashSet::with_capacity_and_hasher(WORDS_COUNT, FxBuildHasher);
        words.extend(WORDS.iter().map(|&word| word.to_string()));
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of known words with exactly `length` characters
    #[must_use]
    pub fn count_with_length(&self, length: usize) -> usize {
        self.words
            .iter()
            .filter(|word| word.chars().count() == length)
            .count()
    }

    /// Lengths in `lengths` with no known word, i.e. rounds nobody could win
    #[must_use]
    pub fn missing_lengths(&self, lengths: RangeInclusive<usize>) -> Vec<usize> {
        lengths
            .filter(|&length| self.count_with_length(length) == 0)
            .collect()
    }
}

impl Dictionary for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
