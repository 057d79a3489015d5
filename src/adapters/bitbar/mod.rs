//! Menu Renderer Adapters.
//!
//! - `BitBarRenderer` - BitBar/xbar/SwiftBar plugin text protocol

mod bitbar_renderer;

pub use bitbar_renderer::{format_menu, BitBarRenderer};
