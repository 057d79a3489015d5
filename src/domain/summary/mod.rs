//! Summary Module - Turning an encyclopedia summary into menu lines.
//!
//! # Components
//!
//! - `wrap_words` - Word-count wrapping of the plain-text summary
//! - `SummaryOutcome` - What the summary section shows, including the
//!   three fallback messages

mod wrap;

pub use wrap::{wrap_words, WORDS_PER_LINE};

use serde::Serialize;

/// First line shown when the summary service cannot be reached.
pub const UNAVAILABLE_HEADLINE: &str = "Wikipedia not available";

/// Second line shown when the summary service cannot be reached.
pub const UNAVAILABLE_HINT: &str = "Please check your internet connection";

/// Single line shown when anything unexpected happens while building the summary.
pub const GENERIC_FAILURE: &str =
    "There was an error getting more info from Wikipedia 😅, please refresh";

/// Content of the summary section of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryOutcome {
    /// Wrapped summary lines.
    Lines { lines: Vec<String> },
    /// The summary service could not be reached.
    Unavailable,
    /// The service answered but nothing usable came back.
    NotFound { bias: String },
    /// Something unexpected went wrong; partial output discarded.
    Failed,
}

impl SummaryOutcome {
    /// Wraps a plain-text summary, falling back to `NotFound` when the
    /// wrapping yields no lines.
    pub fn from_plain_text(text: &str, bias: &str) -> Self {
        let lines = wrap_words(text, WORDS_PER_LINE);
        if lines.is_empty() {
            SummaryOutcome::NotFound {
                bias: bias.to_string(),
            }
        } else {
            SummaryOutcome::Lines { lines }
        }
    }

    /// The user-visible lines for this outcome.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            SummaryOutcome::Lines { lines } => lines,
            SummaryOutcome::Unavailable => vec![
                UNAVAILABLE_HEADLINE.to_string(),
                UNAVAILABLE_HINT.to_string(),
            ],
            SummaryOutcome::NotFound { bias } => {
                vec![format!("Unable to find '{}' on Wikipedia 😞", bias)]
            }
            SummaryOutcome::Failed => vec![GENERIC_FAILURE.to_string()],
        }
    }

    /// The summary section as a single newline-joined block.
    pub fn into_text(self) -> String {
        self.into_lines().join("\n")
    }

    /// True when a fallback message replaces the summary.
    pub fn is_fallback(&self) -> bool {
        !matches!(self, SummaryOutcome::Lines { .. })
    }
}
