//! HTML tag stripper backed by `scraper`.

use scraper::Html;

use crate::ports::{MarkupError, MarkupStripper};

/// Strips tags by parsing the markup as an HTML fragment and concatenating
/// its text nodes. Character references such as `&amp;` are decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTagStripper;

impl HtmlTagStripper {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupStripper for HtmlTagStripper {
    fn strip(&self, markup: &str) -> Result<String, MarkupError> {
        let fragment = Html::parse_fragment(markup);
        Ok(fragment.root_element().text().collect())
    }
}
