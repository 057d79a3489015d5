//! Menu Module - Assembly of the status-bar menu for the bias of the day.
//!
//! The menu layout is fixed:
//!
//! 1. title glyph (not shown in the dropdown)
//! 2. bias name, linked to an encyclopedia search
//! 3. category label
//! 4. rationale
//! 5. summary lines
//! 6. footer with day, index and total
//!
//! with a separator between each block.

mod item;

pub use item::{MenuItem, TextItem};

use serde::Serialize;

use crate::domain::foundation::DayOfYear;
use crate::domain::selection::DailySelection;

/// Glyph shown in the status bar itself.
pub const TITLE_GLYPH: &str = "💡";

/// Colour used for the bias, category and rationale lines.
pub const ACCENT_COLOR: &str = "#34860D";

/// Footer line reporting where today's pick sits in the list.
///
/// "biase" is kept as-is so output stays identical to earlier releases.
pub fn footer_line(day: DayOfYear, index: usize, total: usize) -> String {
    format!("📅 Day {}, biase #{} of {} total", day, index, total)
}

/// Ordered list of menu items handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Builds the menu for today's selection.
    ///
    /// `summary` is the already resolved summary block (wrapped lines or a
    /// fallback message); `search_url` is the link target for the bias name.
    pub fn assemble(selection: &DailySelection, summary: &[String], search_url: &str) -> Self {
        let entry = &selection.entry;

        Self::new(vec![
            TextItem::new(TITLE_GLYPH).with_dropdown(false).into(),
            MenuItem::Separator,
            TextItem::new(entry.bias.as_str())
                .with_color(ACCENT_COLOR)
                .with_href(search_url)
                .into(),
            MenuItem::Separator,
            TextItem::new(entry.group_label())
                .with_color(ACCENT_COLOR)
                .into(),
            MenuItem::Separator,
            TextItem::new(entry.description.as_str())
                .with_color(ACCENT_COLOR)
                .into(),
            MenuItem::Separator,
            TextItem::new(summary.join("\n")).into(),
            MenuItem::Separator,
            TextItem::new(footer_line(selection.day, selection.index, selection.total)).into(),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::FlattenedEntry;

    fn selection() -> DailySelection {
        DailySelection {
            day: DayOfYear::new(100),
            index: 7,
            total: 222,
            entry: FlattenedEntry {
                group: "1. Too Much Information".to_string(),
                description: "We notice when something has changed.".to_string(),
                bias: "Anchoring".to_string(),
            },
        }
    }

    fn text_of(item: &MenuItem) -> &TextItem {
        match item {
            MenuItem::Text(text) => text,
            MenuItem::Separator => panic!("expected a text item"),
        }
    }

    #[test]
    fn footer_line_matches_published_format() {
        assert_eq!(
            footer_line(DayOfYear::new(100), 7, 222),
            "📅 Day 100, biase #7 of 222 total"
        );
    }

    #[test]
    fn assemble_produces_eleven_items_in_fixed_order() {
        let summary = vec!["line one".to_string(), "line two".to_string()];
        let menu = Menu::assemble(&selection(), &summary, "https://search/Anchoring");
        let items = menu.items();

        assert_eq!(menu.len(), 11);
        for i in [1, 3, 5, 7, 9] {
            assert_eq!(items[i], MenuItem::Separator, "item {} should separate", i);
        }

        assert_eq!(text_of(&items[0]).text, TITLE_GLYPH);
        assert_eq!(text_of(&items[0]).dropdown, Some(false));

        let bias = text_of(&items[2]);
        assert_eq!(bias.text, "Anchoring");
        assert_eq!(bias.color.as_deref(), Some(ACCENT_COLOR));
        assert_eq!(bias.href.as_deref(), Some("https://search/Anchoring"));

        assert_eq!(text_of(&items[4]).text, "Too Much Information");
        assert_eq!(text_of(&items[4]).color.as_deref(), Some(ACCENT_COLOR));

        assert_eq!(text_of(&items[6]).text, "We notice when something has changed.");
        assert_eq!(text_of(&items[6]).color.as_deref(), Some(ACCENT_COLOR));

        assert_eq!(text_of(&items[8]).text, "line one\nline two");
        assert_eq!(text_of(&items[8]).color, None);

        assert_eq!(text_of(&items[10]).text, "📅 Day 100, biase #7 of 222 total");
    }

    #[test]
    fn only_the_bias_line_is_linked() {
        let menu = Menu::assemble(&selection(), &[], "https://search/Anchoring");
        let linked: Vec<_> = menu
            .items()
            .iter()
            .filter_map(|item| match item {
                MenuItem::Text(text) => text.href.as_ref(),
                MenuItem::Separator => None,
            })
            .collect();
        assert_eq!(linked.len(), 1);
    }
}
