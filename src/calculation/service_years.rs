//! Whole-calendar-year arithmetic.
//!
//! Age and tenure are both "complete years elapsed" between a fixed date and
//! a reference date, so the engine keeps a single truncating year counter
//! here and both derivations share it.

use chrono::{Datelike, NaiveDate};

/// Counts the complete calendar years elapsed from `start` to `end`.
///
/// The count is a floor, not a rounding: an employee born on 2 June is still
/// the same age on 1 June of any later year. A 29 February anniversary is
/// treated as not yet reached on 28 February of a common year.
///
/// When `end` is before `start` the result is negative, truncated toward
/// zero (the reversed range's count, negated).
///
/// # Examples
///
/// ```
/// use entitlement_engine::calculation::whole_years_between;
/// use chrono::NaiveDate;
///
/// let born = NaiveDate::from_ymd_opt(1960, 6, 2).unwrap();
/// let day_before = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let birthday = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
///
/// assert_eq!(whole_years_between(born, day_before), 63);
/// assert_eq!(whole_years_between(born, birthday), 64);
/// ```
pub fn whole_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    if end < start {
        return -whole_years_between(end, start);
    }

    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}
