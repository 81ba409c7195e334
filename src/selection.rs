//! The user's in-progress day/month/year pick.

use chrono::NaiveDate;

use crate::age::{self, CalendarDate, DateDifference, ValidationOutcome};
use crate::error::AgeError;

/// Fields are `None` until chosen. `month` is 0-based, so `Some(0)` is January.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl Selection {
    pub fn new(day: Option<u32>, month: Option<u32>, year: Option<i32>) -> Self {
        Self { day, month, year }
    }

    pub fn to_date(&self) -> Option<CalendarDate> {
        Some(CalendarDate::new(self.year?, self.month?, self.day?))
    }

    pub fn validate(&self, today: NaiveDate) -> ValidationOutcome {
        age::validate_date(self.day, self.month, self.year, today)
    }

    /// True when every field is set and the date is valid.
    pub fn can_calculate(&self, today: NaiveDate) -> bool {
        self.validate(today).is_valid()
    }

    /// Validates, then computes the elapsed time up to `today`.
    pub fn calculate(&self, today: NaiveDate) -> Result<DateDifference, AgeError> {
        if let ValidationOutcome::Invalid(reason) = self.validate(today) {
            return Err(reason.into());
        }
        let birth = self.to_date().ok_or(AgeError::Incomplete)?;
        age::compute_difference(birth, today)
    }
}

impl From<CalendarDate> for Selection {
    fn from(date: CalendarDate) -> Self {
        Self::new(Some(date.day), Some(date.month), Some(date.year))
    }
}
