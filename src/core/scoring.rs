//! Word scoring by length
//!
//! Length counts characters, not tiles: a word through `Qu` gains two.

/// Words shorter than this score nothing
pub const MIN_SCORING_LENGTH: usize = 3;

/// Points for a submitted word
///
/// | length | points |
/// |--------|--------|
/// | < 3    | 0      |
/// | 3-4    | 1      |
/// | 5      | 2      |
/// | 6      | 3      |
/// | 7      | 5      |
/// | 8+     | 11     |
///
/// # Examples
/// ```
/// use boggle_board::core::scoring::score;
///
/// assert_eq!(score("CAT"), 1);
/// assert_eq!(score("QUEEN"), 2);
/// ```
#[must_use]
pub fn score(word: &str) -> u32 {
    score_length(word.chars().count())
}

/// Points for a word of `length` characters
#[must_use]
pub const fn score_length(length: usize) -> u32 {
    match length {
        0..MIN_SCORING_LENGTH => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}
