//! Mock Summary Service for testing.
//!
//! Provides a configurable mock implementation of the SummaryService port,
//! allowing tests to run without network access.
//!
//! # Example
//!
//! ```ignore
//! let service = MockSummaryService::new()
//!     .with_summary("<p>Anchoring is ...</p>");
//!
//! let html = service.fetch_summary("Anchoring").await?;
//! assert_eq!(service.calls(), vec!["Anchoring"]);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{SummaryError, SummaryService};

/// Mock summary service for testing.
///
/// Responses are consumed in order; once the queue is empty every further
/// call returns an empty summary.
#[derive(Debug, Clone, Default)]
pub struct MockSummaryService {
    responses: Arc<Mutex<VecDeque<Result<String, SummaryError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockSummaryService {
    /// Creates a mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful summary.
    pub fn with_summary(self, summary: impl Into<String>) -> Self {
        self.push(Ok(summary.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: SummaryError) -> Self {
        self.push(Err(error));
        self
    }

    /// Queries received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn push(&self, response: Result<String, SummaryError>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }
}

#[async_trait]
impl SummaryService for MockSummaryService {
    async fn fetch_summary(&self, query: &str) -> Result<String, SummaryError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(query.to_string());
        }

        self.responses
            .lock()
            .map_err(|_| SummaryError::unavailable("mock poisoned"))?
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }

    fn search_url(&self, query: &str) -> String {
        format!("https://search.test/?q={}", urlencoding::encode(query))
    }
}
