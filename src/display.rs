//! Text shown to the user: the result line, the picked-date echo, and the
//! messages attached to invalid input.

use std::fmt;

use crate::age::{DateDifference, InvalidReason, days_in_month};
use crate::selection::Selection;

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            InvalidReason::OutOfRange => {
                "Invalid date! Please select a valid day for the chosen month."
            }
            InvalidReason::Future => "Please select a date in the past.",
            InvalidReason::Incomplete => "Please fill in all fields.",
        };
        f.write_str(message)
    }
}

/// Returns the difference as e.g. "24 Years 1 Month 0 Days".
pub fn format_difference(diff: &DateDifference) -> String {
    format!(
        "{} Year{} {} Month{} {} Day{}",
        diff.years,
        plural(diff.years),
        diff.months,
        plural(diff.months),
        diff.days,
        plural(diff.days)
    )
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Echo of the picked date as `DD/MM/YYYY` with a 1-based month. Unset
/// fields show as zeros.
pub fn format_selection(selection: &Selection) -> String {
    let day = selection.day.unwrap_or(0);
    let month = selection.month.map_or(0, |m| m + 1);
    let year = selection
        .year
        .map_or_else(|| "0000".to_string(), |y| format!("{y:04}"));
    format!("{day:02}/{month:02}/{year}")
}

/// Highest day a user may pick. All 31 are offered until both month and year
/// are known.
pub fn max_selectable_day(month: Option<u32>, year: Option<i32>) -> u32 {
    match (month, year) {
        (Some(month), Some(year)) if month < 12 => days_in_month(month, year),
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_pluralizes_only_one() {
        assert_eq!(
            format_difference(&DateDifference::new(24, 0, 1)),
            "24 Years 0 Months 1 Day"
        );
        assert_eq!(
            format_difference(&DateDifference::new(1, 1, 2)),
            "1 Year 1 Month 2 Days"
        );
    }

    #[test]
    fn selection_echo_pads_and_shifts_month() {
        let sel = Selection::new(Some(5), Some(0), Some(1990));
        assert_eq!(format_selection(&sel), "05/01/1990");

        let sel = Selection::new(Some(29), Some(11), Some(2000));
        assert_eq!(format_selection(&sel), "29/12/2000");
    }

    #[test]
    fn selection_echo_for_unset_fields() {
        assert_eq!(format_selection(&Selection::default()), "00/00/0000");
        let sel = Selection::new(None, Some(1), None);
        assert_eq!(format_selection(&sel), "00/02/0000");
    }

    #[test]
    fn selectable_days_follow_month_and_year() {
        assert_eq!(max_selectable_day(Some(1), Some(2024)), 29);
        assert_eq!(max_selectable_day(Some(1), Some(2023)), 28);
        assert_eq!(max_selectable_day(Some(3), Some(2023)), 30);
        assert_eq!(max_selectable_day(Some(1), None), 31);
        assert_eq!(max_selectable_day(None, Some(2024)), 31);
    }

    #[test]
    fn reason_messages() {
        assert_eq!(
            InvalidReason::Future.to_string(),
            "Please select a date in the past."
        );
        assert_eq!(
            InvalidReason::Incomplete.to_string(),
            "Please fill in all fields."
        );
    }
}
