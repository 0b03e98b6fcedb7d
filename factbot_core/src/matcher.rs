//! Wildcard-aware token sequence matching.

use crate::pattern::{Pattern, PatternToken};

/// Try `pattern` against `query`, returning the tokens bound to the
/// wildcard on success.
///
/// Without a wildcard the pattern only matches a token-for-token equal
/// query, and the capture is empty. With a wildcard, the literal tokens
/// before it must align with the query prefix and the literal tokens after
/// it with the query suffix; everything strictly in between is the capture,
/// which may itself be empty. The split is unique because a [`Pattern`]
/// carries at most one wildcard.
///
/// Comparison is case-sensitive; callers normalize case beforehand.
#[must_use]
pub fn attempt_match(pattern: &Pattern, query: &[String]) -> Option<Vec<String>> {
    let tokens = pattern.tokens();

    let Some(split) = pattern.wildcard_position() else {
        let equal = tokens.len() == query.len() && literals_align(tokens, query);
        return equal.then(Vec::new);
    };

    let prefix = &tokens[..split];
    let suffix = &tokens[split + 1..];
    if query.len() < prefix.len() + suffix.len() {
        return None;
    }

    let (head, rest) = query.split_at(prefix.len());
    let (capture, tail) = rest.split_at(rest.len() - suffix.len());

    (literals_align(prefix, head) && literals_align(suffix, tail)).then(|| capture.to_vec())
}

fn literals_align(tokens: &[PatternToken], words: &[String]) -> bool {
    tokens
        .iter()
        .zip(words)
        .all(|(token, word)| matches!(token, PatternToken::Literal(lit) if lit == word))
}
