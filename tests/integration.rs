//! Integration tests for the Holiday Entitlement Engine.
//!
//! This test suite covers the end-to-end scenarios:
//! - Constructing employees from `DDMMYYYY` text
//! - Derived metrics (age, tenure, department, holiday days)
//! - Company aggregates and their empty-registry sentinels
//! - Error cases for malformed date text
//! - Property tests over the whole input space

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use entitlement_engine::calculation::{
    DEPARTMENT_UNASSIGNED, basic_holiday_days, department_code, extra_holiday_days,
    format_ddmmyyyy, parse_ddmmyyyy, whole_years_between,
};
use entitlement_engine::error::EngineError;
use entitlement_engine::models::{Company, EMPTY_AVERAGE_SENTINEL, Employee};

// =============================================================================
// Test Helpers
// =============================================================================

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn employee(number: i32, dob: &str, enlisted: &str) -> Employee {
    Employee::from_ddmmyyyy(number, dob, enlisted).unwrap()
}

// =============================================================================
// Employee Scenarios
// =============================================================================

#[test]
fn test_department_one_senior_long_service_employee() {
    let veteran = employee(1234, "01011960", "01012000");

    assert_eq!(veteran.age_on(as_of()), 64);
    assert_eq!(veteran.years_enlisted_on(as_of()), 24);
    assert_eq!(veteran.department(), 1);
    assert_eq!(veteran.basic_holiday_days(), 25);
    assert_eq!(veteran.extra_holiday_days_on(as_of()), 8);
    assert_eq!(veteran.holiday_days_on(as_of()), 33);
}

#[test]
fn test_two_digit_number_has_unassigned_department() {
    let recruit = employee(42, "01012000", "01012022");

    assert_eq!(recruit.department(), DEPARTMENT_UNASSIGNED);
    assert_eq!(recruit.basic_holiday_days(), 20);
    assert_eq!(recruit.extra_holiday_days_on(as_of()), 0);
    assert_eq!(recruit.holiday_days_on(as_of()), 20);
}

#[test]
fn test_department_two_employee_gets_standard_days() {
    let standard = employee(2345, "01011990", "01012020");

    assert_eq!(standard.department(), 2);
    assert_eq!(standard.holiday_days_on(as_of()), 20);
}

#[test]
fn test_long_service_only_bonus() {
    let loyal = employee(7001, "01011985", "01012010");

    assert_eq!(loyal.age_on(as_of()), 39);
    assert_eq!(loyal.years_enlisted_on(as_of()), 14);
    assert_eq!(loyal.holiday_days_on(as_of()), 23);
}

#[test]
fn test_senior_age_only_bonus() {
    let senior = employee(3008, "01011960", "01012020");

    assert_eq!(senior.age_on(as_of()), 64);
    assert_eq!(senior.years_enlisted_on(as_of()), 4);
    assert_eq!(senior.holiday_days_on(as_of()), 25);
}

#[test]
fn test_thresholds_are_exclusive() {
    // Exactly 55 years old and exactly 10 years of service on the
    // reference date: neither bonus applies yet.
    let at_thresholds = employee(4004, "01061969", "01062014");

    assert_eq!(at_thresholds.age_on(as_of()), 55);
    assert_eq!(at_thresholds.years_enlisted_on(as_of()), 10);
    assert_eq!(at_thresholds.extra_holiday_days_on(as_of()), 0);
}

#[test]
fn test_setters_change_derived_values() {
    let mut worker = employee(2345, "01011990", "01012020");
    assert_eq!(worker.holiday_days_on(as_of()), 20);

    worker.set_date_of_birth_ddmmyyyy("01011960").unwrap();
    worker.set_enlisted_ddmmyyyy("01012000").unwrap();
    worker.number = 1234;

    assert_eq!(worker.holiday_days_on(as_of()), 33);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn test_malformed_dates_are_rejected_with_date_format_error() {
    for bad in [
        "",
        "1234567",
        "123456789",
        "ab012000",
        "00012000",
        "32012000",
        "01002000",
        "01132000",
        "29022023",
        "01-01-20",
    ] {
        let result = Employee::from_ddmmyyyy(1234, bad, "01012000");
        match result {
            Err(EngineError::DateFormat { input, .. }) => assert_eq!(input, bad),
            Ok(_) => panic!("'{bad}' should have been rejected"),
        }
    }
}

#[test]
fn test_failed_setter_leaves_record_unchanged() {
    let mut worker = employee(1234, "01011960", "01012000");
    let before = worker.clone();

    assert!(worker.set_date_of_birth_ddmmyyyy("31041999").is_err());
    assert!(worker.set_enlisted_ddmmyyyy("xxxxxxxx").is_err());

    assert_eq!(worker, before);
}

// =============================================================================
// Company Scenarios
// =============================================================================

#[test]
fn test_empty_company_uses_sentinels() {
    let company = Company::new();

    assert_eq!(company.total_holiday_days_on(as_of()), 0);
    assert!(company.oldest_employee_on(as_of()).is_none());
    assert_eq!(company.average_years_enlisted_on(as_of()), EMPTY_AVERAGE_SENTINEL);
}

#[test]
fn test_company_aggregates_over_mixed_workforce() {
    let mut company = Company::new();
    company.add_employee(employee(1234, "01011960", "01012000")); // 33 days, 24 yrs
    company.add_employee(employee(2345, "01011990", "01012020")); // 20 days, 4 yrs
    company.add_employee(employee(42, "01011985", "01012010")); // 23 days, 14 yrs

    assert_eq!(company.len(), 3);
    assert_eq!(company.total_holiday_days_on(as_of()), 76);
    assert_eq!(company.oldest_employee_on(as_of()).unwrap().number, 1234);
    assert_eq!(company.average_years_enlisted_on(as_of()), 14.0);
}

#[test]
fn test_duplicate_registration_is_ignored() {
    let mut company = Company::new();
    company.add_employee(employee(1234, "01011960", "01012000"));
    company.add_employee(employee(1234, "01011990", "01012020"));

    assert_eq!(company.len(), 1);
    assert_eq!(company.total_holiday_days_on(as_of()), 33);
}

#[test]
fn test_single_employee_aggregates_match_the_employee() {
    let mut company = Company::new();
    let only = employee(5678, "01011970", "01011995");
    let days = only.holiday_days_on(as_of());
    let years = only.years_enlisted_on(as_of());
    company.add_employee(only);

    assert_eq!(company.total_holiday_days_on(as_of()), days);
    assert_eq!(company.oldest_employee_on(as_of()).unwrap().number, 5678);
    assert_eq!(company.average_years_enlisted_on(as_of()), f64::from(years));
}

// =============================================================================
// Property Tests
// =============================================================================

prop_compose! {
    /// A valid calendar date with a 4-digit year, as (date, DDMMYYYY text).
    fn valid_ddmmyyyy()(
        year in 1000i32..=9999,
        month in 1u32..=12,
        day_seed in 0u32..=30,
    ) -> (NaiveDate, String) {
        let mut day = day_seed % 28 + 1;
        // Push some cases onto the month-end boundary.
        if day_seed >= 28 {
            day = 28;
            while NaiveDate::from_ymd_opt(year, month, day + 1).is_some() {
                day += 1;
            }
        }
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        (date, format!("{:02}{:02}{:04}", date.day(), date.month(), date.year()))
    }
}

proptest! {
    #[test]
    fn prop_valid_dates_round_trip((date, text) in valid_ddmmyyyy()) {
        let parsed = parse_ddmmyyyy(&text).unwrap();
        prop_assert_eq!(parsed, date);
        prop_assert_eq!(format_ddmmyyyy(parsed), text);
    }

    #[test]
    fn prop_wrong_length_is_rejected(text in "[0-9]{0,12}") {
        if text.len() != 8 {
            prop_assert!(parse_ddmmyyyy(&text).is_err());
        }
    }

    #[test]
    fn prop_non_digit_text_is_rejected(text in "[0-9]{0,7}[a-zA-Z -][0-9a-zA-Z -]{0,7}") {
        prop_assert!(parse_ddmmyyyy(&text).is_err());
    }

    #[test]
    fn prop_short_numbers_are_unassigned(number in 0i32..=999) {
        prop_assert_eq!(department_code(number), DEPARTMENT_UNASSIGNED);
    }

    #[test]
    fn prop_department_is_leading_digit(number in 1000i32..=i32::MAX) {
        let leading = number
            .to_string()
            .chars()
            .next()
            .unwrap()
            .to_digit(10)
            .unwrap() as i32;
        prop_assert_eq!(department_code(number), leading);
    }

    #[test]
    fn prop_basic_days_25_iff_department_one(number in any::<i32>()) {
        let department = department_code(number);
        let expected = if department == 1 { 25 } else { 20 };
        prop_assert_eq!(basic_holiday_days(department), expected);
    }

    #[test]
    fn prop_extra_days_monotonic_in_age_and_tenure(
        age in -150i32..=150,
        years in -150i32..=150,
        age_gain in 0i32..=100,
        years_gain in 0i32..=100,
    ) {
        let base = extra_holiday_days(age, years);
        prop_assert!(extra_holiday_days(age + age_gain, years) >= base);
        prop_assert!(extra_holiday_days(age, years + years_gain) >= base);
        prop_assert!(extra_holiday_days(age + age_gain, years + years_gain) >= base);
    }

    #[test]
    fn prop_extra_days_bounded(age in any::<i32>(), years in any::<i32>()) {
        let extra = extra_holiday_days(age, years);
        prop_assert!(extra == 0 || extra == 3 || extra == 5 || extra == 8);
    }

    #[test]
    fn prop_whole_years_is_antisymmetric(
        (start, _) in valid_ddmmyyyy(),
        (end, _) in valid_ddmmyyyy(),
    ) {
        prop_assert_eq!(
            whole_years_between(start, end),
            -whole_years_between(end, start)
        );
    }

    #[test]
    fn prop_total_holiday_days_is_sum_of_members(
        numbers in proptest::collection::hash_set(0i32..=99999, 0..8),
    ) {
        let mut company = Company::new();
        let mut expected = 0;
        for number in numbers {
            let member = employee(number, "01011970", "01012005");
            expected += member.holiday_days_on(as_of());
            company.add_employee(member);
        }
        prop_assert_eq!(company.total_holiday_days_on(as_of()), expected);
    }
}
