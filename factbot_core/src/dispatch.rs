//! Ordered pattern-action dispatch.
//!
//! The table pairs each [`Pattern`] with an action and resolves queries
//! first-match-wins: entries are tried in registration order and the first
//! matching pattern decides the outcome, even if a later entry would also
//! match. The table is built once at startup and never mutated.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::matcher::attempt_match;
use crate::pattern::{Pattern, PatternError};

/// Sentinel answer when no pattern matches the query.
pub const NOT_UNDERSTOOD: &str = "I don't understand";

/// Sentinel answer when a pattern matches but its handler has nothing to say.
pub const NO_ANSWERS: &str = "No answers";

/// An action invoked with the tokens captured by its pattern's wildcard.
///
/// Handlers own all lookup I/O. A failed lookup surfaces as an error from
/// [`DispatchTable::resolve`] for that query only; it leaves the table and
/// the matcher untouched.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn answer(&self, capture: &[String]) -> anyhow::Result<Vec<String>>;
}

enum Action {
    Respond(Arc<dyn Handler>),
    Exit,
}

struct Entry {
    pattern: Pattern,
    action: Action,
}

/// Outcome of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Answer lines to show the user; never empty.
    Answers(Vec<String>),
    /// The exit pattern matched; the session should end.
    Terminate,
}

/// The ordered pattern-action table.
#[derive(Default)]
pub struct DispatchTable {
    entries: Vec<Entry>,
}

impl DispatchTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a pattern answered by `handler`. Registration order is
    /// priority order.
    pub fn respond(
        &mut self,
        pattern: &str,
        handler: Arc<dyn Handler>,
    ) -> Result<(), PatternError> {
        let pattern = Pattern::parse(pattern)?;
        info!("Registering pattern: {pattern}");
        self.entries.push(Entry {
            pattern,
            action: Action::Respond(handler),
        });
        Ok(())
    }

    /// Append a pattern that ends the session when matched.
    pub fn exit(&mut self, pattern: &str) -> Result<(), PatternError> {
        let pattern = Pattern::parse(pattern)?;
        info!("Registering exit pattern: {pattern}");
        self.entries.push(Entry {
            pattern,
            action: Action::Exit,
        });
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve one query against the table.
    ///
    /// The first matching entry wins. A matching handler that returns no
    /// answers yields the [`NO_ANSWERS`] sentinel; a query no entry matches
    /// yields [`NOT_UNDERSTOOD`]. Handler lookup failures propagate as
    /// errors and are reported per query by the caller.
    pub async fn resolve(&self, tokens: &[String]) -> anyhow::Result<Resolution> {
        for entry in &self.entries {
            let Some(capture) = attempt_match(&entry.pattern, tokens) else {
                continue;
            };
            debug!("Pattern \"{}\" matched, capture: {capture:?}", entry.pattern);

            return match &entry.action {
                Action::Exit => Ok(Resolution::Terminate),
                Action::Respond(handler) => {
                    let answers = handler.answer(&capture).await?;
                    if answers.is_empty() {
                        Ok(Resolution::Answers(vec![NO_ANSWERS.to_string()]))
                    } else {
                        Ok(Resolution::Answers(answers))
                    }
                }
            };
        }

        Ok(Resolution::Answers(vec![NOT_UNDERSTOOD.to_string()]))
    }
}
