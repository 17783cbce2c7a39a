//! Flight period - the date range a campaign runs over

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Inclusive date range a campaign is booked for.
///
/// Invariant: `starts_on <= ends_on`, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPeriod {
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl FlightPeriod {
    /// Create a new FlightPeriod
    ///
    /// # Errors
    /// Returns `DomainError::InvalidFlightPeriod` if the end date precedes
    /// the start date.
    pub fn new(starts_on: NaiveDate, ends_on: NaiveDate) -> Result<Self, DomainError> {
        if ends_on < starts_on {
            return Err(DomainError::InvalidFlightPeriod { starts_on, ends_on });
        }
        Ok(Self { starts_on, ends_on })
    }

    /// Check if a date falls inside the period (inclusive on both ends)
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.starts_on <= date && date <= self.ends_on
    }

    /// Check if the period touches any day of the given month
    pub fn overlaps_month(&self, year: i32, month: u32) -> bool {
        let start_key = (self.starts_on.year(), self.starts_on.month());
        let end_key = (self.ends_on.year(), self.ends_on.month());
        start_key <= (year, month) && (year, month) <= end_key
    }

    /// Number of days the campaign runs, inclusive
    pub fn duration_days(&self) -> i64 {
        (self.ends_on - self.starts_on).num_days() + 1
    }
}
