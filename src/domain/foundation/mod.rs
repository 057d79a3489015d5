//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the bias-of-the-day domain.

mod day_of_year;
mod errors;

pub use day_of_year::DayOfYear;
pub use errors::ValidationError;
