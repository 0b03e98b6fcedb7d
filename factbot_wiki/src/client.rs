//! Wikipedia page retrieval over the MediaWiki API.
//!
//! Title resolution mirrors "search, take the first hit": a `list=search`
//! request resolves free-text titles to a canonical page name, then
//! `action=parse` fetches the rendered page HTML.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from page retrieval and extraction.
#[derive(Debug, Error)]
pub enum WikiError {
    /// The search returned no pages for the requested title.
    #[error("no Wikipedia page found for \"{0}\"")]
    PageNotFound(String),

    /// The page exists but carries no infobox.
    #[error("page has no infobox")]
    NoInfobox,

    /// The infobox exists but the expected field does not occur in it.
    #[error("{0}")]
    FieldNotFound(String),

    #[error("Wikipedia request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected MediaWiki response: {0}")]
    Api(String),
}

/// Wikipedia client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Wikipedia language code (subdomain)
    #[serde(default = "WikiConfig::default_language")]
    pub language: String,

    /// Request timeout (seconds)
    #[serde(default = "WikiConfig::default_timeout")]
    pub timeout: u64,

    /// User-Agent header
    #[serde(default = "WikiConfig::default_user_agent")]
    pub user_agent: String,
}

impl WikiConfig {
    fn default_language() -> String {
        "en".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }

    fn default_user_agent() -> String {
        "factbot/0.1 (factual query bot)".to_string()
    }

    /// MediaWiki API endpoint for the configured language.
    #[must_use]
    pub fn api_endpoint(&self) -> String {
        format!("https://{}.wikipedia.org/w/api.php", self.language)
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            language: Self::default_language(),
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
        }
    }
}

/// Source of rendered page HTML, keyed by a free-text title.
///
/// The trait seam keeps handlers testable against canned pages.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn page_html(&self, title: &str) -> Result<String, WikiError>;
}

/// MediaWiki-backed [`PageSource`].
pub struct WikiClient {
    http: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: SearchQuery,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: ParsePage,
}

#[derive(Debug, Deserialize)]
struct ParsePage {
    text: String,
}

impl WikiClient {
    pub fn new(config: &WikiConfig) -> Result<Self, WikiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            endpoint: config.api_endpoint(),
        })
    }

    /// Resolve a free-text title to the top search hit.
    async fn search_title(&self, title: &str) -> Result<String, WikiError> {
        debug!("Searching Wikipedia for \"{title}\"");
        let body: serde_json::Value = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", title),
                ("srlimit", "1"),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let response: SearchResponse =
            serde_json::from_value(body).map_err(|e| WikiError::Api(e.to_string()))?;

        response
            .query
            .search
            .into_iter()
            .next()
            .map(|hit| hit.title)
            .ok_or_else(|| WikiError::PageNotFound(title.to_string()))
    }
}

#[async_trait]
impl PageSource for WikiClient {
    async fn page_html(&self, title: &str) -> Result<String, WikiError> {
        let resolved = self.search_title(title).await?;
        info!("Fetching page \"{resolved}\"");

        let body: serde_json::Value = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("action", "parse"),
                ("page", resolved.as_str()),
                ("prop", "text"),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let response: ParseResponse =
            serde_json::from_value(body).map_err(|e| WikiError::Api(e.to_string()))?;

        Ok(response.parse.text)
    }
}
