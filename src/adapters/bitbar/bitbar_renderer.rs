//! BitBar Renderer - Writes a menu in the BitBar/xbar plugin text protocol.
//!
//! # Protocol
//!
//! - Each output line is one menu row.
//! - Rows before the first `---` are shown in the status bar; the rest go
//!   into the dropdown.
//! - Options follow the text after ` | ` as space-separated `key=value` pairs.
//!
//! Multi-line text items become one row per line, each carrying the item's
//! options. The protocol has no escape syntax, so row text is rewritten
//! instead: `|` becomes `¦` and a leading `--` (submenu marker) is written
//! with `‐` (U+2010) hyphens.

use std::io::Write;
use std::sync::Mutex;

use tracing::debug;

use crate::domain::menu::{Menu, MenuItem, TextItem};
use crate::ports::{MenuRenderer, RenderError};

const SEPARATOR: &str = "---";

/// Stand-in for `|`, which would start the option list.
const PIPE_SUBSTITUTE: &str = "¦";

/// Stand-in for a leading `-`, which would nest the row in a submenu.
const HYPHEN_SUBSTITUTE: char = '\u{2010}';

/// Renders menus as BitBar text to any writer (stdout in production).
pub struct BitBarRenderer<W: Write + Send> {
    out: Mutex<W>,
}

impl BitBarRenderer<std::io::Stdout> {
    /// Renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> BitBarRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the renderer and returns the writer.
    pub fn into_inner(self) -> Result<W, RenderError> {
        self.out.into_inner().map_err(|_| RenderError::Poisoned)
    }
}

impl<W: Write + Send> MenuRenderer for BitBarRenderer<W> {
    fn render(&self, menu: &Menu) -> Result<(), RenderError> {
        let text = format_menu(menu);
        debug!("Rendering {} menu items", menu.len());

        let mut out = self.out.lock().map_err(|_| RenderError::Poisoned)?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Formats a whole menu, one protocol row per line, newline-terminated.
pub fn format_menu(menu: &Menu) -> String {
    let mut rows = Vec::new();
    for item in menu.items() {
        match item {
            MenuItem::Separator => rows.push(SEPARATOR.to_string()),
            MenuItem::Text(text) => rows.extend(format_text_item(text)),
        }
    }

    let mut output = rows.join("\n");
    output.push('\n');
    output
}

fn format_text_item(item: &TextItem) -> Vec<String> {
    let options = format_options(item);
    item.text
        .split('\n')
        .map(|line| {
            let line = escape_row_text(line);
            if options.is_empty() {
                line
            } else {
                format!("{} | {}", line, options)
            }
        })
        .collect()
}

/// Rewrites the characters the protocol would read as markup.
fn escape_row_text(line: &str) -> String {
    let line = line.replace('|', PIPE_SUBSTITUTE);
    if !line.starts_with("--") {
        return line;
    }

    let body = line.trim_start_matches('-');
    let hyphens = line.len() - body.len();
    let mut escaped: String = std::iter::repeat(HYPHEN_SUBSTITUTE).take(hyphens).collect();
    escaped.push_str(body);
    escaped
}

fn format_options(item: &TextItem) -> String {
    let mut options = Vec::new();
    if let Some(color) = &item.color {
        options.push(format_option("color", color));
    }
    if let Some(href) = &item.href {
        options.push(format_option("href", href));
    }
    if let Some(dropdown) = item.dropdown {
        options.push(format_option("dropdown", &dropdown.to_string()));
    }
    options.join(" ")
}

fn format_option(key: &str, value: &str) -> String {
    if value.chars().any(char::is_whitespace) {
        format!("{}=\"{}\"", key, value.replace('"', "\\\""))
    } else {
        format!("{}={}", key, value)
    }
}
