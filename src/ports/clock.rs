//! Clock Port - Source of the current calendar date.

use chrono::NaiveDate;

/// Port for reading today's date in the user's local time zone.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
