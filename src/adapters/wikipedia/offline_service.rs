//! Offline Summary Service - Stand-in used when no HTTP client can be built.
//!
//! Every lookup reports `Unavailable`, so the menu still renders with the
//! connection notice while the bias line keeps its search link.

use async_trait::async_trait;

use super::wikipedia_service::search_url_for;
use crate::ports::{SummaryError, SummaryService};

/// Summary service that is never reachable.
#[derive(Debug, Clone)]
pub struct OfflineSummaryService {
    search_base_url: String,
    reason: String,
}

impl OfflineSummaryService {
    pub fn new(search_base_url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            search_base_url: search_base_url.into(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SummaryService for OfflineSummaryService {
    async fn fetch_summary(&self, _query: &str) -> Result<String, SummaryError> {
        Err(SummaryError::unavailable(self.reason.clone()))
    }

    fn search_url(&self, query: &str) -> String {
        search_url_for(&self.search_base_url, query)
    }
}
