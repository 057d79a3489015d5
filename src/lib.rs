//! Bias of the Day - A status-bar plugin showing one cognitive bias per day.
//!
//! Each invocation picks an entry from an embedded taxonomy of cognitive
//! biases by day of year, fetches its Wikipedia summary, and prints a
//! BitBar-compatible menu.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
