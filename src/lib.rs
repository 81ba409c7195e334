//! Calendar arithmetic for an age calculator: validate a picked birth date and
//! work out the years, months and days elapsed since it.

pub mod age;
pub mod config;
pub mod display;
pub mod error;
pub mod record;
pub mod selection;

pub use age::{
    CalendarDate, DateDifference, InvalidReason, ValidationOutcome, compute_difference,
    days_in_month, is_leap_year, validate_date,
};
pub use config::{Config, YearRange};
pub use error::{AgeError, ConfigError, RecordError};
pub use record::{LastCalculation, RecordStore};
pub use selection::Selection;
