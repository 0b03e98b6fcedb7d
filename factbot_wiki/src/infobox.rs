//! Infobox extraction and text cleanup.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::client::WikiError;

static INFOBOX_SELECTOR: OnceLock<Selector> = OnceLock::new();
static SPACE_RUNS: OnceLock<Regex> = OnceLock::new();
static NEWLINE_RUNS: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static selector validated at compile time"
)]
fn infobox_selector() -> &'static Selector {
    INFOBOX_SELECTOR
        .get_or_init(|| Selector::parse(".infobox").expect("static selector is valid"))
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn space_runs() -> &'static Regex {
    SPACE_RUNS.get_or_init(|| Regex::new(" +").expect("static regex is valid"))
}

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn newline_runs() -> &'static Regex {
    NEWLINE_RUNS.get_or_init(|| Regex::new("\n+").expect("static regex is valid"))
}

/// Extract the cleaned text of the first infobox on a page.
///
/// The infobox is Wikipedia's structured summary table; its text is where
/// all field extraction happens.
pub fn first_infobox_text(html: &str) -> Result<String, WikiError> {
    let document = Html::parse_document(html);
    let infobox = document
        .select(infobox_selector())
        .next()
        .ok_or(WikiError::NoInfobox)?;

    let text: String = infobox.text().collect::<Vec<_>>().join(" ");
    Ok(clean_text(&text))
}

/// Replace non-printable and non-ASCII characters with spaces, then collapse
/// runs of spaces and newlines.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let only_ascii: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r') {
                c
            } else {
                ' '
            }
        })
        .collect();

    let no_dup_spaces = space_runs().replace_all(&only_ascii, " ");
    newline_runs().replace_all(&no_dup_spaces, "\n").into_owned()
}
