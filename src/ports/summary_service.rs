//! Summary Service Port - Interface for the online encyclopedia.
//!
//! Abstracts the one network call the plugin makes: fetching a short
//! summary of an article by title.
//!
//! # Contract
//!
//! - A reachable service that has no article for the query answers with an
//!   empty summary, not an error. The caller turns that into a "not found"
//!   line.
//! - `Unavailable` covers transport failures and error statuses.
//! - `MalformedResponse` covers a reachable service whose answer cannot be
//!   understood.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedSummary;
//!
//! #[async_trait]
//! impl SummaryService for FixedSummary {
//!     async fn fetch_summary(&self, _query: &str) -> Result<String, SummaryError> {
//!         Ok("<p>An <b>anchoring</b> effect ...</p>".to_string())
//!     }
//!
//!     fn search_url(&self, query: &str) -> String {
//!         format!("https://example.org/search?q={}", query)
//!     }
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

/// Port for encyclopedia summary lookups.
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Fetch the HTML summary of the article named `query`.
    ///
    /// Single attempt, no retries.
    async fn fetch_summary(&self, query: &str) -> Result<String, SummaryError>;

    /// Public search page for `query`, used as the link target in the menu.
    fn search_url(&self, query: &str) -> String;
}

/// Summary lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// Service could not be reached or answered with an error status.
    #[error("Summary service unavailable: {0}")]
    Unavailable(String),

    /// Service answered with something that is not a summary.
    #[error("Malformed summary response: {0}")]
    MalformedResponse(String),
}

impl SummaryError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a malformed response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// True when the service itself could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
