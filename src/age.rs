//! age.rs
//!
//! Calendar arithmetic behind the age calculator: month lengths, validation
//! of a picked day/month/year against the calendar and against "today", and
//! the elapsed "X years, Y months, Z days" between two dates.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from previous month)
//!   • leap years
//!   • varying month lengths
//!
//! Months are 0-based throughout (0 = January, 11 = December). Nothing in
//! here logs or holds state; callers pass "today" in explicitly.

use chrono::{Datelike, NaiveDate};

use crate::error::AgeError;

const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A year/month/day triple. Not validated on construction; see [`validate_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    /// 0-based month.
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Converts to a chrono date, or `None` if the triple is not a real date.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.checked_add(1)?, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0(), date.day())
    }
}

/// Elapsed calendar time: `months` in 0..=11, `days` in 0..=30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateDifference {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl DateDifference {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }
}

/// Why a candidate date cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// Day is past the end of the month (or month/day is outside the calendar).
    OutOfRange,
    /// Date is later than the reference date.
    Future,
    /// At least one field has not been chosen yet.
    Incomplete,
}

impl InvalidReason {
    /// Whether the caller should surface this to the user. Incomplete input is
    /// still being filled in and stays silent.
    pub fn is_user_facing(self) -> bool {
        !matches!(self, InvalidReason::Incomplete)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationOutcome {
    Valid,
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn reason(self) -> Option<InvalidReason> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(reason) => Some(reason),
        }
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns number of days in a given 0-based month of `year` (handles leap years)
pub fn days_in_month(month: u32, year: i32) -> u32 {
    if month == 1 && is_leap_year(year) {
        return 29;
    }
    // out-of-range months should never occur but this keeps the function total
    MONTH_LENGTHS.get(month as usize).copied().unwrap_or(30)
}

/// Checks a picked date against the calendar and against `today`.
///
/// `None` means the field has not been chosen yet; month `Some(0)` is January.
/// Checks run in order: completeness, day within month, not after `today`.
pub fn validate_date(
    day: Option<u32>,
    month: Option<u32>,
    year: Option<i32>,
    today: NaiveDate,
) -> ValidationOutcome {
    let (Some(day), Some(month), Some(year)) = (day, month, year) else {
        return ValidationOutcome::Invalid(InvalidReason::Incomplete);
    };

    if month > 11 || day == 0 || day > days_in_month(month, year) {
        return ValidationOutcome::Invalid(InvalidReason::OutOfRange);
    }

    // Years chrono cannot represent are out of range too.
    let Some(candidate) = CalendarDate::new(year, month, day).to_naive() else {
        return ValidationOutcome::Invalid(InvalidReason::OutOfRange);
    };

    if candidate > today {
        return ValidationOutcome::Invalid(InvalidReason::Future);
    }

    ValidationOutcome::Valid
}

/// Calendar-correct elapsed time from `birth` to `today`.
///
/// Fails with [`AgeError::BirthAfterReference`] if `today` precedes `birth`,
/// and with `Invalid(OutOfRange)` if `birth` is not a real date; callers are
/// expected to have run [`validate_date`] first.
pub fn compute_difference(birth: CalendarDate, today: NaiveDate) -> Result<DateDifference, AgeError> {
    // Both dates within chrono's range keep the arithmetic below from overflowing.
    let Some(birth) = birth.to_naive() else {
        return Err(AgeError::Invalid(InvalidReason::OutOfRange));
    };

    let mut years = today.year() - birth.year();
    let mut months = today.month0() as i32 - birth.month0() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Determine the previous month relative to `today`.
        let (prev_year, prev_month) = if today.month0() == 0 {
            (today.year() - 1, 11)
        } else {
            (today.year(), today.month0() - 1)
        };

        // Borrow the length of the month that ran out (28–31). A birth day
        // past its end anchors on the month's last day.
        let borrowed = days_in_month(prev_month, prev_year);
        days = today.day() as i32 + borrowed as i32 - birth.day().min(borrowed) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    if years < 0 {
        return Err(AgeError::BirthAfterReference);
    }

    Ok(DateDifference::new(years as u32, months as u32, days as u32))
}
