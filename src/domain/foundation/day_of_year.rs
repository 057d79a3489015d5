//! Day-of-year value object.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Ordinal day within the calendar year, 1-based.
///
/// January 1st is day 1 and December 31st is day 365 (366 in leap years).
/// Computed from the local calendar date, so the number a user sees always
/// matches the date on their wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayOfYear(u32);

impl DayOfYear {
    /// Day number for the given calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.ordinal())
    }

    /// Creates a day number from a raw value.
    pub fn new(day: u32) -> Self {
        Self(day)
    }

    /// Returns the raw day number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
