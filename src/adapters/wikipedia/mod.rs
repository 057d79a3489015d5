//! Summary Service Adapters.
//!
//! - `WikipediaSummaryService` - Wikipedia REST API page summaries
//! - `OfflineSummaryService` - Always unavailable, used when the client cannot be built
//! - `MockSummaryService` - Queued canned responses for testing

mod mock_service;
mod offline_service;
mod wikipedia_service;

pub use mock_service::MockSummaryService;
pub use offline_service::OfflineSummaryService;
pub use wikipedia_service::{WikipediaConfig, WikipediaSummaryService};
