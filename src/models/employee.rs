//! Employee model.
//!
//! This module defines the Employee record and its derived HR metrics:
//! age, years of service, department code, and holiday-day entitlement.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculation::{
    HolidayBreakdown, basic_holiday_days, department_code, extra_holiday_days, format_ddmmyyyy,
    holiday_breakdown, parse_ddmmyyyy, whole_years_between,
};
use crate::error::EngineResult;

/// An employee record: an identifying number and two calendar dates.
///
/// The fields are public and freely mutable; the record enforces no ordering
/// between the dates (an enlistment date before the date of birth is
/// representable). Every derived metric is a pure function of the current
/// field values and a reference date.
///
/// Derived queries come in two forms: `*_on(as_of)` computes against an
/// explicit reference date (use these in tests), while the parameterless
/// conveniences read today's local date.
///
/// # Examples
///
/// ```
/// use entitlement_engine::models::Employee;
/// use chrono::NaiveDate;
///
/// let employee = Employee::from_ddmmyyyy(1234, "01011960", "01012000").unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// assert_eq!(employee.age_on(as_of), 64);
/// assert_eq!(employee.years_enlisted_on(as_of), 24);
/// assert_eq!(employee.department(), 1);
/// assert_eq!(employee.holiday_days_on(as_of), 33);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee number. Its decimal digits encode the department code;
    /// uniqueness is the registry's concern, not the record's.
    pub number: i32,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// The date the employee joined the company.
    pub enlisted: NaiveDate,
}

impl Employee {
    /// Creates an employee from structured dates.
    pub fn new(number: i32, date_of_birth: NaiveDate, enlisted: NaiveDate) -> Self {
        Employee {
            number,
            date_of_birth,
            enlisted,
        }
    }

    /// Creates an employee from `DDMMYYYY` date strings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DateFormat`](crate::error::EngineError) when
    /// either string is not a valid `DDMMYYYY` calendar date.
    pub fn from_ddmmyyyy(number: i32, date_of_birth: &str, enlisted: &str) -> EngineResult<Self> {
        Ok(Employee {
            number,
            date_of_birth: parse_ddmmyyyy(date_of_birth)?,
            enlisted: parse_ddmmyyyy(enlisted)?,
        })
    }

    /// Replaces the date of birth from a `DDMMYYYY` string.
    ///
    /// The field is untouched when the text does not parse.
    pub fn set_date_of_birth_ddmmyyyy(&mut self, text: &str) -> EngineResult<()> {
        self.date_of_birth = parse_ddmmyyyy(text)?;
        Ok(())
    }

    /// Replaces the enlistment date from a `DDMMYYYY` string.
    ///
    /// The field is untouched when the text does not parse.
    pub fn set_enlisted_ddmmyyyy(&mut self, text: &str) -> EngineResult<()> {
        self.enlisted = parse_ddmmyyyy(text)?;
        Ok(())
    }

    /// The date of birth in `DDMMYYYY` text form.
    pub fn date_of_birth_ddmmyyyy(&self) -> String {
        format_ddmmyyyy(self.date_of_birth)
    }

    /// The enlistment date in `DDMMYYYY` text form.
    pub fn enlisted_ddmmyyyy(&self) -> String {
        format_ddmmyyyy(self.enlisted)
    }

    /// The employee's age in complete years on the given date.
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        whole_years_between(self.date_of_birth, as_of)
    }

    /// The employee's age in complete years as of today.
    pub fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }

    /// Complete years of service on the given date.
    pub fn years_enlisted_on(&self, as_of: NaiveDate) -> i32 {
        whole_years_between(self.enlisted, as_of)
    }

    /// Complete years of service as of today.
    pub fn years_enlisted(&self) -> i32 {
        self.years_enlisted_on(Local::now().date_naive())
    }

    /// The department code encoded in the employee number.
    ///
    /// Returns `-1` when the number has fewer than 4 digits; see
    /// [`department_code`].
    pub fn department(&self) -> i32 {
        department_code(self.number)
    }

    /// The department-based base holiday entitlement.
    pub fn basic_holiday_days(&self) -> i32 {
        basic_holiday_days(self.department())
    }

    /// The age and long-service bonus days on the given date.
    pub fn extra_holiday_days_on(&self, as_of: NaiveDate) -> i32 {
        extra_holiday_days(self.age_on(as_of), self.years_enlisted_on(as_of))
    }

    /// The age and long-service bonus days as of today.
    pub fn extra_holiday_days(&self) -> i32 {
        self.extra_holiday_days_on(Local::now().date_naive())
    }

    /// The full holiday entitlement on the given date.
    pub fn holiday_days_on(&self, as_of: NaiveDate) -> i32 {
        self.basic_holiday_days() + self.extra_holiday_days_on(as_of)
    }

    /// The full holiday entitlement as of today.
    pub fn holiday_days(&self) -> i32 {
        self.holiday_days_on(Local::now().date_naive())
    }

    /// The entitlement on the given date, split into basic and extra days.
    pub fn holiday_breakdown_on(&self, as_of: NaiveDate) -> HolidayBreakdown {
        holiday_breakdown(
            self.department(),
            self.age_on(as_of),
            self.years_enlisted_on(as_of),
        )
    }
}
