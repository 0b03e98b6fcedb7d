//! Pattern-action handlers backed by Wikipedia infoboxes.
//!
//! Every handler shares the same shape: join the captured tokens into a
//! page title, fetch the page through a [`PageSource`], take the first
//! infobox, and extract one field from it.

use std::sync::Arc;

use async_trait::async_trait;
use factbot_core::Handler;
use tracing::debug;

use crate::client::{PageSource, WikiError};
use crate::fields;
use crate::infobox::first_infobox_text;

/// The infobox fields the query table knows how to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoboxField {
    BirthDate,
    PolarRadius,
    ScientificName,
    AnimalDomain,
    AtomicNumber,
}

impl InfoboxField {
    fn extract(self, text: &str) -> Result<String, WikiError> {
        match self {
            Self::BirthDate => fields::birth_date(text),
            Self::PolarRadius => fields::polar_radius(text),
            Self::ScientificName => fields::scientific_name(text),
            Self::AnimalDomain => fields::animal_domain(text),
            Self::AtomicNumber => fields::atomic_number(text),
        }
    }
}

/// Handler answering with a single infobox field of the captured page.
pub struct FieldLookup {
    source: Arc<dyn PageSource>,
    field: InfoboxField,
}

impl FieldLookup {
    #[must_use]
    pub const fn new(source: Arc<dyn PageSource>, field: InfoboxField) -> Self {
        Self { source, field }
    }

    async fn lookup(&self, title: &str) -> Result<String, WikiError> {
        let html = self.source.page_html(title).await?;
        let text = first_infobox_text(&html)?;
        self.field.extract(&text)
    }
}

#[async_trait]
impl Handler for FieldLookup {
    async fn answer(&self, capture: &[String]) -> anyhow::Result<Vec<String>> {
        let title = capture.join(" ");
        debug!("Looking up {:?} for \"{title}\"", self.field);
        Ok(vec![self.lookup(&title).await?])
    }
}

/// Handler answering with the whole cleaned infobox text.
pub struct FullInfobox {
    source: Arc<dyn PageSource>,
}

impl FullInfobox {
    #[must_use]
    pub const fn new(source: Arc<dyn PageSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Handler for FullInfobox {
    async fn answer(&self, capture: &[String]) -> anyhow::Result<Vec<String>> {
        let title = capture.join(" ");
        debug!("Looking up the full infobox for \"{title}\"");
        let html = self.source.page_html(&title).await?;
        Ok(vec![first_infobox_text(&html)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory page source serving one canned page for any title.
    struct CannedPage(&'static str);

    #[async_trait]
    impl PageSource for CannedPage {
        async fn page_html(&self, _title: &str) -> Result<String, WikiError> {
            Ok(self.0.to_string())
        }
    }

    /// Page source with no pages at all.
    struct NoPages;

    #[async_trait]
    impl PageSource for NoPages {
        async fn page_html(&self, title: &str) -> Result<String, WikiError> {
            Err(WikiError::PageNotFound(title.to_string()))
        }
    }

    const PERSON_PAGE: &str = r#"
        <html><body><table class="infobox"><tbody>
          <tr><th>Born</th><td>1961-08-04 Honolulu, Hawaii</td></tr>
        </tbody></table></body></html>
    "#;

    fn capture(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[tokio::test]
    async fn field_lookup_answers_with_one_value() -> anyhow::Result<()> {
        let handler = FieldLookup::new(Arc::new(CannedPage(PERSON_PAGE)), InfoboxField::BirthDate);
        let answers = handler.answer(&capture("barack obama")).await?;
        assert_eq!(answers, vec!["1961-08-04".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn missing_field_fails_the_lookup() {
        let handler = FieldLookup::new(Arc::new(CannedPage(PERSON_PAGE)), InfoboxField::PolarRadius);
        let result = handler.answer(&capture("barack obama")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_page_fails_the_lookup() {
        let handler = FieldLookup::new(Arc::new(NoPages), InfoboxField::BirthDate);
        let result = handler.answer(&capture("atlantis")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn full_infobox_returns_the_cleaned_text() -> anyhow::Result<()> {
        let handler = FullInfobox::new(Arc::new(CannedPage(PERSON_PAGE)));
        let answers = handler.answer(&capture("barack obama")).await?;
        assert_eq!(answers.len(), 1);
        assert!(answers[0].contains("Born"));
        assert!(answers[0].contains("1961-08-04"));
        Ok(())
    }
}
