//! Markup Stripper Adapters.

mod html_tag_stripper;

pub use html_tag_stripper::HtmlTagStripper;
