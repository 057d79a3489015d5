//! Markup Stripper Port - Converts summary markup into plain text.

use thiserror::Error;

/// Port for removing markup tags from a summary.
pub trait MarkupStripper: Send + Sync {
    /// Returns the text content of `markup` with every tag removed.
    fn strip(&self, markup: &str) -> Result<String, MarkupError>;
}

/// Markup stripping errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("Could not strip markup: {0}")]
    Unparseable(String),
}
