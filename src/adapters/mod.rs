//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `wikipedia` - Summary service (Wikipedia REST API, offline, mock)
//! - `markup` - HTML tag stripping
//! - `bitbar` - Status-bar menu rendering
//! - `clock` - System and fixed clocks

pub mod bitbar;
pub mod clock;
pub mod markup;
pub mod wikipedia;

pub use bitbar::BitBarRenderer;
pub use clock::{FixedClock, SystemClock};
pub use markup::HtmlTagStripper;
pub use wikipedia::{
    MockSummaryService, OfflineSummaryService, WikipediaConfig, WikipediaSummaryService,
};
