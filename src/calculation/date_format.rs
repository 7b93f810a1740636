//! Strict `DDMMYYYY` date parsing and formatting.
//!
//! This module provides the fixed day-month-year text format accepted by
//! employee constructors and setters: exactly 8 decimal digits (2-digit day,
//! 2-digit month, 4-digit year), interpreted per the proleptic Gregorian
//! calendar.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// The number of characters a `DDMMYYYY` date string must have.
pub const DATE_FORMAT_LEN: usize = 8;

/// Parses a `DDMMYYYY` date string into a [`NaiveDate`].
///
/// The input must be exactly 8 ASCII decimal digits. The first two encode
/// the day, the next two the month, and the last four the year. Anything
/// else, including otherwise well-formed strings that do not name a real
/// calendar date (day 32, month 13, 29 February in a non-leap year), is
/// rejected.
///
/// # Arguments
///
/// * `text` - The candidate date string
///
/// # Returns
///
/// Returns the parsed date, or [`EngineError::DateFormat`] describing why
/// the text was rejected.
///
/// # Examples
///
/// ```
/// use entitlement_engine::calculation::parse_ddmmyyyy;
/// use chrono::NaiveDate;
///
/// let date = parse_ddmmyyyy("01011960").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(1960, 1, 1).unwrap());
///
/// assert!(parse_ddmmyyyy("32011960").is_err());
/// assert!(parse_ddmmyyyy("1011960").is_err());
/// ```
pub fn parse_ddmmyyyy(text: &str) -> EngineResult<NaiveDate> {
    if text.len() != DATE_FORMAT_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::DateFormat {
            input: text.to_string(),
            message: "expected 8 decimal digits".to_string(),
        });
    }

    // The length and digit checks above make these slices and parses infallible.
    let day: u32 = text[0..2].parse().unwrap_or_default();
    let month: u32 = text[2..4].parse().unwrap_or_default();
    let year: i32 = text[4..8].parse().unwrap_or_default();

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| EngineError::DateFormat {
        input: text.to_string(),
        message: "not a valid calendar date".to_string(),
    })
}

/// Formats a [`NaiveDate`] back into the `DDMMYYYY` text form.
///
/// Round-trips with [`parse_ddmmyyyy`] for every date whose year fits in
/// four digits.
///
/// # Examples
///
/// ```
/// use entitlement_engine::calculation::{format_ddmmyyyy, parse_ddmmyyyy};
///
/// let date = parse_ddmmyyyy("29022000").unwrap();
/// assert_eq!(format_ddmmyyyy(date), "29022000");
/// ```
pub fn format_ddmmyyyy(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}
