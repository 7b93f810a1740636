//! Calculation logic for the Holiday Entitlement Engine.
//!
//! This module contains all the derivation functions the models build on:
//! strict `DDMMYYYY` date parsing, whole-calendar-year counting for age and
//! tenure, department code extraction from employee numbers, and the
//! holiday-day entitlement rules.

mod date_format;
mod department;
mod holiday;
mod service_years;

pub use date_format::{DATE_FORMAT_LEN, format_ddmmyyyy, parse_ddmmyyyy};
pub use department::{DEPARTMENT_UNASSIGNED, department_code};
pub use holiday::{
    DEPARTMENT_ONE_HOLIDAY_DAYS, HolidayBreakdown, LONG_SERVICE_BONUS_DAYS,
    LONG_SERVICE_THRESHOLD_YEARS, SENIOR_AGE_BONUS_DAYS, SENIOR_AGE_THRESHOLD,
    STANDARD_HOLIDAY_DAYS, basic_holiday_days, extra_holiday_days, holiday_breakdown,
};
pub use service_years::whole_years_between;
