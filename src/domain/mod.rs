//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (day of year, validation errors)
//! - `taxonomy` - The embedded bias tree and its flattened form
//! - `selection` - Deterministic day-indexed pick of one entry
//! - `summary` - Word wrapping and the summary fallback messages
//! - `menu` - Status-bar menu assembly
//!
//! Everything here is pure: no I/O, no clock reads.

pub mod foundation;
pub mod menu;
pub mod selection;
pub mod summary;
pub mod taxonomy;
