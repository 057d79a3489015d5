//! Menu Renderer Port - The status-bar display protocol.

use thiserror::Error;

use crate::domain::menu::Menu;

/// Port for emitting an assembled menu to the host status bar.
pub trait MenuRenderer: Send + Sync {
    /// Render `menu`. Called exactly once per invocation.
    fn render(&self, menu: &Menu) -> Result<(), RenderError>;
}

/// Rendering errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write menu: {0}")]
    Io(#[from] std::io::Error),

    #[error("Renderer output is poisoned")]
    Poisoned,
}
