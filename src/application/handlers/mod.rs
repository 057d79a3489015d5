//! Application handlers.
//!
//! Handlers that orchestrate domain operations across ports.

pub mod show_bias_of_the_day;

pub use show_bias_of_the_day::{ShowBiasError, ShowBiasOfTheDayHandler, ShowBiasOfTheDayResult};
