//! Wikipedia Summary Service - Implementation of SummaryService for Wikipedia.
//!
//! Uses the REST API page summary endpoint, which returns the lead section
//! of an article as both plain text and HTML.
//!
//! # Configuration
//!
//! ```ignore
//! let config = WikipediaConfig::new("bias-of-the-day/0.1 (+https://example.org)")
//!     .with_api_base_url("https://de.wikipedia.org/api/rest_v1")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let service = WikipediaSummaryService::new(config)?;
//! ```
//!
//! # Status mapping
//!
//! - 2xx: `extract_html` (falling back to `extract`) of the JSON body
//! - 404: empty summary, the article does not exist
//! - anything else, or no response at all: `SummaryError::Unavailable`

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::SummaryConfig;
use crate::ports::{SummaryError, SummaryService};

/// Configuration for the Wikipedia summary service.
#[derive(Debug, Clone)]
pub struct WikipediaConfig {
    /// REST API base URL (default: https://en.wikipedia.org/api/rest_v1).
    pub api_base_url: String,
    /// Search page linked from the menu (default: https://en.wikipedia.org/w/index.php).
    pub search_base_url: String,
    /// User-Agent header; Wikimedia rejects anonymous clients.
    pub user_agent: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl WikipediaConfig {
    /// Creates a configuration for English Wikipedia.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            api_base_url: "https://en.wikipedia.org/api/rest_v1".to_string(),
            search_base_url: "https://en.wikipedia.org/w/index.php".to_string(),
            user_agent: user_agent.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the REST API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Sets the search page base URL.
    pub fn with_search_base_url(mut self, url: impl Into<String>) -> Self {
        self.search_base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&SummaryConfig> for WikipediaConfig {
    fn from(config: &SummaryConfig) -> Self {
        Self::new(config.user_agent.clone())
            .with_api_base_url(config.api_base_url.clone())
            .with_search_base_url(config.search_base_url.clone())
            .with_timeout(config.timeout())
    }
}

/// Wikipedia REST API summary client.
pub struct WikipediaSummaryService {
    config: WikipediaConfig,
    client: Client,
}

/// Subset of the page summary payload we read.
#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    extract_html: Option<String>,
}

impl WikipediaSummaryService {
    /// Creates a service with the given configuration.
    pub fn new(config: WikipediaConfig) -> Result<Self, SummaryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SummaryError::unavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Page summary endpoint for an article title.
    fn summary_url(&self, title: &str) -> String {
        format!(
            "{}/page/summary/{}",
            self.config.api_base_url.trim_end_matches('/'),
            urlencoding::encode(&title.replace(' ', "_"))
        )
    }

    /// Extracts the summary markup from a 2xx response body.
    fn parse_body(body: &str) -> Result<String, SummaryError> {
        let summary: PageSummary = serde_json::from_str(body)
            .map_err(|e| SummaryError::malformed(e.to_string()))?;

        Ok(summary
            .extract_html
            .filter(|html| !html.trim().is_empty())
            .or(summary.extract)
            .unwrap_or_default())
    }
}

#[async_trait]
impl SummaryService for WikipediaSummaryService {
    async fn fetch_summary(&self, query: &str) -> Result<String, SummaryError> {
        let url = self.summary_url(query);
        debug!("Fetching summary from {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Summary request failed: {}", e);
            if e.is_timeout() {
                SummaryError::unavailable(format!(
                    "Timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            } else if e.is_connect() {
                SummaryError::unavailable(format!("Connection failed: {}", e))
            } else {
                SummaryError::unavailable(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("No article found for '{}'", query);
            return Ok(String::new());
        }
        if !status.is_success() {
            warn!("Summary endpoint returned {}", status);
            return Err(SummaryError::unavailable(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SummaryError::unavailable(e.to_string()))?;

        let summary = Self::parse_body(&body)?;
        debug!("Fetched {} bytes of summary for '{}'", summary.len(), query);
        Ok(summary)
    }

    fn search_url(&self, query: &str) -> String {
        search_url_for(&self.config.search_base_url, query)
    }
}

/// Search page link for `query` under `search_base_url`.
pub(super) fn search_url_for(search_base_url: &str, query: &str) -> String {
    format!("{}?search={}", search_base_url, urlencoding::encode(query))
}
