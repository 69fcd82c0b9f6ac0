//! Letter value table
//!
//! Classic Scrabble tile values, indexed by `letter - b'A'`.

/// Point value for each letter A-Z
///
/// | Value | Letters                       |
/// |-------|-------------------------------|
/// | 1     | A, E, I, O, U, L, N, R, S, T  |
/// | 2     | D, G                          |
/// | 3     | B, C, M, P                    |
/// | 4     | F, H, V, W, Y                 |
/// | 5     | K                             |
/// | 8     | J, X                          |
/// | 10    | Q, Z                          |
pub const LETTER_VALUES: [u8; 26] = [
    1,  // A
    3,  // B
    3,  // C
    2,  // D
    1,  // E
    4,  // F
    2,  // G
    4,  // H
    1,  // I
    8,  // J
    5,  // K
    1,  // L
    3,  // M
    1,  // N
    1,  // O
    3,  // P
    10, // Q
    1,  // R
    1,  // S
    1,  // T
    1,  // U
    4,  // V
    4,  // W
    8,  // X
    4,  // Y
    10, // Z
];

/// Look up the value of a single character
///
/// Case-insensitive. Anything outside A-Z is worth 0.
#[inline]
#[must_use]
pub fn letter_value(ch: char) -> u32 {
    let upper = ch.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        u32::from(LETTER_VALUES[(upper as u8 - b'A') as usize])
    } else {
        0
    }
}

/// Score a word by summing its letter values
///
/// # Examples
/// ```
/// use scrabble_rush::core::score;
///
/// assert_eq!(score("apple"), 9);
/// assert_eq!(score("ORANGE"), 7);
/// assert_eq!(score(""), 0);
/// ```
#[must_use]
pub fn score(word: &str) -> u32 {
    word.chars().map(letter_value).sum()
}
