//! Word list loading utilities
//!
//! Loads a custom dictionary from a plain text file, one word per line.

use super::{DictionaryError, WordSet};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file
///
/// Blank lines are skipped and entries are lowercased. An empty result is an error,
/// since no round could ever be won with it.
///
/// # Errors
///
/// Returns `DictionaryError::Read` if the file cannot be read, or
/// `DictionaryError::Empty` if it holds no words.
///
/// # Examples
/// ```no_run
/// use scrabble_rush::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordSet, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let dictionary = WordSet::from_words(content.lines());
    if dictionary.is_empty() {
        return Err(DictionaryError::Empty(path.display().to_string()));
    }

    tracing::info!(
        "Loaded {} words from {}",
        dictionary.len(),
        path.display()
    );
    Ok(dictionary)
}
