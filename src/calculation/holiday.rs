//! Holiday-day entitlement rules.
//!
//! This module encodes the company leave policy: a base entitlement that
//! depends on the employee's department, plus cumulative seniority bonuses
//! for age and long service.

use serde::{Deserialize, Serialize};

/// Base holiday days for employees outside department 1.
pub const STANDARD_HOLIDAY_DAYS: i32 = 20;

/// Base holiday days for employees of department 1.
pub const DEPARTMENT_ONE_HOLIDAY_DAYS: i32 = 25;

/// Age above which the senior-age bonus applies (exclusive).
pub const SENIOR_AGE_THRESHOLD: i32 = 55;

/// Extra days granted once age exceeds [`SENIOR_AGE_THRESHOLD`].
pub const SENIOR_AGE_BONUS_DAYS: i32 = 5;

/// Years of service above which the long-service bonus applies (exclusive).
pub const LONG_SERVICE_THRESHOLD_YEARS: i32 = 10;

/// Extra days granted once service exceeds [`LONG_SERVICE_THRESHOLD_YEARS`].
pub const LONG_SERVICE_BONUS_DAYS: i32 = 3;

/// An employee's holiday entitlement, split into its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayBreakdown {
    /// Days from the department-based base entitlement.
    pub basic: i32,
    /// Days from the age and long-service bonuses.
    pub extra: i32,
    /// The full entitlement, `basic + extra`.
    pub total: i32,
}

/// Returns the base holiday entitlement for a department code.
///
/// Department 1 gets 25 days; every other department gets 20. An unassigned
/// department (the `-1` sentinel for short employee numbers) is "not
/// department 1" and therefore also gets 20 — malformed numbers are not
/// special-cased.
///
/// # Examples
///
/// ```
/// use entitlement_engine::calculation::basic_holiday_days;
///
/// assert_eq!(basic_holiday_days(1), 25);
/// assert_eq!(basic_holiday_days(4), 20);
/// assert_eq!(basic_holiday_days(-1), 20);
/// ```
pub fn basic_holiday_days(department: i32) -> i32 {
    if department == 1 {
        DEPARTMENT_ONE_HOLIDAY_DAYS
    } else {
        STANDARD_HOLIDAY_DAYS
    }
}

/// Returns the bonus holiday days for an employee's age and years of service.
///
/// Employees older than 55 gain 5 extra days; employees with more than 10
/// years of service gain another 3. The bonuses are cumulative, so the
/// maximum is 8.
///
/// # Examples
///
/// ```
/// use entitlement_engine::calculation::extra_holiday_days;
///
/// assert_eq!(extra_holiday_days(40, 5), 0);
/// assert_eq!(extra_holiday_days(56, 5), 5);
/// assert_eq!(extra_holiday_days(40, 11), 3);
/// assert_eq!(extra_holiday_days(64, 24), 8);
/// ```
pub fn extra_holiday_days(age: i32, years_enlisted: i32) -> i32 {
    let mut days = 0;

    if age > SENIOR_AGE_THRESHOLD {
        days += SENIOR_AGE_BONUS_DAYS;
    }

    if years_enlisted > LONG_SERVICE_THRESHOLD_YEARS {
        days += LONG_SERVICE_BONUS_DAYS;
    }

    days
}

/// Computes the full entitlement breakdown for a department, age, and tenure.
pub fn holiday_breakdown(department: i32, age: i32, years_enlisted: i32) -> HolidayBreakdown {
    let basic = basic_holiday_days(department);
    let extra = extra_holiday_days(age, years_enlisted);

    HolidayBreakdown {
        basic,
        extra,
        total: basic + extra,
    }
}
