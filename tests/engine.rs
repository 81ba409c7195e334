//! Calendar properties of the age engine.

use agecalc::{
    AgeError, CalendarDate, DateDifference, InvalidReason, ValidationOutcome, compute_difference,
    days_in_month, is_leap_year, validate_date,
};
use chrono::{Days, Months, NaiveDate};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Adds whole months (clamping to month end), then days.
fn add(birth: NaiveDate, diff: DateDifference) -> NaiveDate {
    birth
        .checked_add_months(Months::new(diff.years * 12 + diff.months))
        .and_then(|d| d.checked_add_days(Days::new(diff.days as u64)))
        .unwrap()
}

#[test]
fn leap_rule_matches_chrono() {
    for year in 1582..=2400 {
        let chrono_leap = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        assert_eq!(is_leap_year(year), chrono_leap, "year {year}");
    }
}

#[test]
fn month_lengths_match_chrono() {
    for year in [1900, 1999, 2000, 2023, 2024] {
        for month in 0..12u32 {
            let first = ymd(year, month + 1, 1);
            let next = first.checked_add_months(Months::new(1)).unwrap();
            let expected = (next - first).num_days() as u32;
            assert_eq!(days_in_month(month, year), expected, "{year}-{month}");
        }
    }
}

#[test]
fn difference_round_trips_through_calendar_addition() {
    let references = [
        ymd(2024, 3, 1),
        ymd(2024, 2, 29),
        ymd(2023, 3, 1),
        ymd(2025, 1, 1),
        ymd(2025, 12, 31),
        ymd(2024, 7, 31),
    ];
    let mut birth = ymd(1999, 11, 1);
    let last = ymd(2025, 12, 31);

    while birth <= last {
        for &today in &references {
            if birth > today {
                continue;
            }
            let diff = compute_difference(CalendarDate::from(birth), today).unwrap();
            assert!(diff.months <= 11, "{birth} -> {today}: {diff:?}");
            assert!(diff.days <= 30, "{birth} -> {today}: {diff:?}");
            assert_eq!(add(birth, diff), today, "{birth} -> {today}: {diff:?}");
        }
        birth = birth.succ_opt().unwrap();
    }
}

#[test]
fn leap_day_to_march_first() {
    let diff = compute_difference(CalendarDate::new(2000, 1, 29), ymd(2024, 3, 1)).unwrap();
    assert_eq!(diff, DateDifference::new(24, 0, 1));
}

#[test]
fn march_first_borrows_february_length() {
    // Jan 30 2024 -> Mar 1 2024: anchors on Feb 29, then one day
    let diff = compute_difference(CalendarDate::new(2024, 0, 30), ymd(2024, 3, 1)).unwrap();
    assert_eq!(diff, DateDifference::new(0, 1, 1));

    let diff = compute_difference(CalendarDate::new(2024, 1, 28), ymd(2024, 3, 1)).unwrap();
    assert_eq!(diff, DateDifference::new(0, 0, 2));

    let diff = compute_difference(CalendarDate::new(2023, 1, 28), ymd(2023, 3, 1)).unwrap();
    assert_eq!(diff, DateDifference::new(0, 0, 1));
}

#[test]
fn birth_equal_to_today() {
    let today = ymd(2025, 10, 16);
    let diff = compute_difference(CalendarDate::from(today), today).unwrap();
    assert_eq!(diff, DateDifference::new(0, 0, 0));
}

#[test]
fn validation_examples() {
    let today = ymd(2025, 10, 16);
    assert_eq!(
        validate_date(Some(31), Some(3), Some(2024), today),
        ValidationOutcome::Invalid(InvalidReason::OutOfRange)
    );
    assert_eq!(
        validate_date(Some(1), Some(0), Some(2099), today),
        ValidationOutcome::Invalid(InvalidReason::Future)
    );
    assert_eq!(
        validate_date(Some(1), Some(0), Some(2000), today),
        ValidationOutcome::Valid
    );
}

#[test]
fn unvalidated_future_birth_is_fatal() {
    let today = ymd(2025, 10, 16);
    assert_eq!(
        compute_difference(CalendarDate::new(2025, 9, 17), today),
        Err(AgeError::BirthAfterReference)
    );
}

#[test]
fn every_valid_date_has_a_difference() {
    let today = ymd(2025, 3, 15);
    for year in [2023, 2024, 2025] {
        for month in 0..12 {
            for day in 1..=31 {
                let outcome = validate_date(Some(day), Some(month), Some(year), today);
                let result = compute_difference(CalendarDate::new(year, month, day), today);
                if outcome.is_valid() {
                    assert!(result.is_ok(), "{year}-{month}-{day}");
                }
                if outcome == ValidationOutcome::Invalid(InvalidReason::Future) {
                    assert_eq!(result, Err(AgeError::BirthAfterReference));
                }
            }
        }
    }
}

#[test]
fn extreme_or_impossible_birth_dates_are_rejected() {
    let today = ymd(2024, 1, 1);
    let out_of_range = Err(AgeError::Invalid(InvalidReason::OutOfRange));
    assert_eq!(compute_difference(CalendarDate::new(i32::MIN, 0, 1), today), out_of_range);
    assert_eq!(compute_difference(CalendarDate::new(i32::MAX, 11, 31), today), out_of_range);
    // February 30th
    assert_eq!(compute_difference(CalendarDate::new(2023, 1, 30), today), out_of_range);
}
