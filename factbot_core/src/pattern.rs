//! Word patterns with at most one wildcard position.

use std::fmt;

use thiserror::Error;

/// The pattern-string marker for a wildcard position.
pub const WILDCARD_MARKER: &str = "%";

/// One position in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    /// Must equal the query token at the aligned position.
    Literal(String),
    /// Matches a contiguous run of zero or more query tokens.
    Wildcard,
}

/// Errors from parsing a pattern string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("pattern \"{0}\" has more than one wildcard")]
    MultipleWildcards(String),
}

/// An ordered token sequence where at most one position is a wildcard.
///
/// A single wildcard keeps matching unambiguous: the lengths of the literal
/// prefix and suffix fix the only possible split of the query, so there is
/// never any backtracking. Patterns with two or more wildcards are rejected
/// at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<PatternToken>,
    wildcard: Option<usize>,
}

impl Pattern {
    /// Parse a whitespace-separated pattern string, `%` marking the
    /// wildcard position.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let mut tokens = Vec::new();
        let mut wildcard = None;

        for word in text.split_whitespace() {
            if word == WILDCARD_MARKER {
                if wildcard.is_some() {
                    return Err(PatternError::MultipleWildcards(text.to_string()));
                }
                wildcard = Some(tokens.len());
                tokens.push(PatternToken::Wildcard);
            } else {
                tokens.push(PatternToken::Literal(word.to_string()));
            }
        }

        if tokens.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self { tokens, wildcard })
    }

    #[must_use]
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Index of the wildcard, if the pattern has one.
    #[must_use]
    pub const fn wildcard_position(&self) -> Option<usize> {
        self.wildcard
    }

    /// Number of literal tokens, i.e. the minimum query length that can
    /// still match.
    #[must_use]
    pub fn literal_len(&self) -> usize {
        self.tokens.len() - usize::from(self.wildcard.is_some())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match token {
                PatternToken::Literal(word) => f.write_str(word)?,
                PatternToken::Wildcard => f.write_str(WILDCARD_MARKER)?,
            }
        }
        Ok(())
    }
}
