//! Menu item descriptors understood by the rendering sink.

use serde::Serialize;

/// One line (or separator) of the status-bar menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuItem {
    Text(TextItem),
    Separator,
}

/// A text entry with optional styling.
///
/// `text` may span several lines; renderers decide how to split it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TextItem {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<bool>,
}

impl TextItem {
    /// Creates an unstyled text item.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Sets the text colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Makes the item a link.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Controls whether the item also shows in the dropdown.
    pub fn with_dropdown(mut self, dropdown: bool) -> Self {
        self.dropdown = Some(dropdown);
        self
    }
}

impl From<TextItem> for MenuItem {
    fn from(item: TextItem) -> Self {
        MenuItem::Text(item)
    }
}
