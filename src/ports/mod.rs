//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SummaryService` - Encyclopedia summary lookup (the only network call)
//! - `MarkupStripper` - Markup to plain text
//! - `MenuRenderer` - Status-bar menu sink
//! - `Clock` - Local calendar date

mod clock;
mod markup_stripper;
mod menu_renderer;
mod summary_service;

pub use clock::Clock;
pub use markup_stripper::{MarkupError, MarkupStripper};
pub use menu_renderer::{MenuRenderer, RenderError};
pub use summary_service::{SummaryError, SummaryService};
