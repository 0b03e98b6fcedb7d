//! Raw input normalization.

/// Normalize one line of user input into query tokens.
///
/// Trims surrounding whitespace, drops trailing question marks, lowercases
/// and splits on whitespace. The result is transient per interaction;
/// nothing is persisted.
#[must_use]
pub fn normalize(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_end_matches('?')
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
