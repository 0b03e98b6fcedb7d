//! The fixed pattern-action table.

use std::sync::Arc;

use factbot_core::DispatchTable;
use factbot_wiki::{FieldLookup, FullInfobox, InfoboxField, PageSource};

/// Build the query table, in priority order. The first matching pattern
/// wins, so more specific patterns must come before broader ones.
pub fn dispatch_table(source: &Arc<dyn PageSource>) -> anyhow::Result<DispatchTable> {
    let field = |f| Arc::new(FieldLookup::new(source.clone(), f));

    let mut table = DispatchTable::new();
    table.respond("when was % born", field(InfoboxField::BirthDate))?;
    table.respond("what is the polar radius of %", field(InfoboxField::PolarRadius))?;
    table.respond(
        "what is the scientific name of %",
        field(InfoboxField::ScientificName),
    )?;
    table.respond(
        "what is the animal domain of %",
        field(InfoboxField::AnimalDomain),
    )?;
    table.respond(
        "tell me everything about %",
        Arc::new(FullInfobox::new(source.clone())),
    )?;
    table.respond(
        "what is the atomic number of %",
        field(InfoboxField::AtomicNumber),
    )?;
    table.exit("bye")?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use factbot_core::{NOT_UNDERSTOOD, Resolution, normalize};
    use factbot_wiki::WikiError;

    /// Page source serving a fixed page for every title.
    struct CannedPage(&'static str);

    #[async_trait]
    impl PageSource for CannedPage {
        async fn page_html(&self, _title: &str) -> Result<String, WikiError> {
            Ok(self.0.to_string())
        }
    }

    const PERSON_PAGE: &str = r#"
        <html><body><table class="infobox"><tbody>
          <tr><th>Born</th><td>1961-08-04</td></tr>
        </tbody></table></body></html>
    "#;

    fn canned_table() -> anyhow::Result<DispatchTable> {
        let source: Arc<dyn PageSource> = Arc::new(CannedPage(PERSON_PAGE));
        dispatch_table(&source)
    }

    #[tokio::test]
    async fn birth_query_resolves_end_to_end() -> anyhow::Result<()> {
        let table = canned_table()?;
        let outcome = table
            .resolve(&normalize("When was Barack Obama born?"))
            .await?;
        assert_eq!(
            outcome,
            Resolution::Answers(vec!["1961-08-04".to_string()])
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_query_is_not_understood() -> anyhow::Result<()> {
        let table = canned_table()?;
        let outcome = table
            .resolve(&normalize("what is the meaning of life"))
            .await?;
        assert_eq!(
            outcome,
            Resolution::Answers(vec![NOT_UNDERSTOOD.to_string()])
        );
        Ok(())
    }

    #[tokio::test]
    async fn bye_terminates_the_session() -> anyhow::Result<()> {
        let table = canned_table()?;
        let outcome = table.resolve(&normalize("bye")).await?;
        assert_eq!(outcome, Resolution::Terminate);
        Ok(())
    }

    #[tokio::test]
    async fn missing_field_surfaces_as_a_lookup_failure() -> anyhow::Result<()> {
        let table = canned_table()?;
        let outcome = table
            .resolve(&normalize("what is the polar radius of jupiter"))
            .await;
        assert!(outcome.is_err());
        Ok(())
    }
}
