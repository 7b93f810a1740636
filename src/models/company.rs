//! Company registry model.
//!
//! This module defines the Company record that registers employees and
//! derives aggregate statistics over them: total holiday liability, the
//! oldest employee, and the average years of service.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Employee;

/// The value [`Company::average_years_enlisted_on`] returns for an empty
/// registry. A sentinel, not an error; callers check for emptiness through
/// it rather than through a `Result`.
pub const EMPTY_AVERAGE_SENTINEL: f64 = -1.0;

/// A registry of the employees working for the company.
///
/// Employees are keyed by their number: registering a second employee with
/// an already-registered number keeps the first record and silently drops
/// the second. There is no removal operation. The registry is not
/// synchronized; callers sharing one across threads must synchronize
/// externally.
///
/// Like the employee queries, aggregates come in `*_on(as_of)` form with an
/// explicit reference date and as wall-clock conveniences.
///
/// # Examples
///
/// ```
/// use entitlement_engine::models::{Company, Employee};
/// use chrono::NaiveDate;
///
/// let mut company = Company::new();
/// company.add_employee(Employee::from_ddmmyyyy(1234, "01011960", "01012000").unwrap());
/// company.add_employee(Employee::from_ddmmyyyy(2345, "01011990", "01012020").unwrap());
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(company.total_holiday_days_on(as_of), 33 + 20);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    employees: HashMap<i32, Employee>,
}

impl Company {
    /// Creates a new company with no employees.
    pub fn new() -> Self {
        Company {
            employees: HashMap::new(),
        }
    }

    /// Registers an employee.
    ///
    /// When an employee with the same number is already registered, the
    /// existing record is kept and this one is dropped; no error is
    /// signaled either way.
    pub fn add_employee(&mut self, employee: Employee) {
        let number = employee.number;
        if self.employees.contains_key(&number) {
            debug!(number, "employee already registered, ignoring");
            return;
        }

        debug!(number, "registering employee");
        self.employees.insert(number, employee);
    }

    /// Iterates over the registered employees in arbitrary order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Looks up a registered employee by number.
    pub fn get(&self, number: i32) -> Option<&Employee> {
        self.employees.get(&number)
    }

    /// The number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// The total holiday days the company has to cover on the given date.
    ///
    /// Returns 0 for an empty registry.
    pub fn total_holiday_days_on(&self, as_of: NaiveDate) -> i32 {
        self.employees
            .values()
            .map(|employee| employee.holiday_days_on(as_of))
            .sum()
    }

    /// The total holiday days as of today.
    pub fn total_holiday_days(&self) -> i32 {
        self.total_holiday_days_on(Local::now().date_naive())
    }

    /// The oldest registered employee on the given date.
    ///
    /// Returns `None` for an empty registry. Ties between equally old
    /// employees are broken arbitrarily; the winner may differ between
    /// calls.
    pub fn oldest_employee_on(&self, as_of: NaiveDate) -> Option<&Employee> {
        self.employees
            .values()
            .max_by_key(|employee| employee.age_on(as_of))
    }

    /// The oldest registered employee as of today.
    pub fn oldest_employee(&self) -> Option<&Employee> {
        self.oldest_employee_on(Local::now().date_naive())
    }

    /// The mean years of service across all employees on the given date.
    ///
    /// Returns exactly [`EMPTY_AVERAGE_SENTINEL`] (-1.0) for an empty
    /// registry.
    pub fn average_years_enlisted_on(&self, as_of: NaiveDate) -> f64 {
        if self.employees.is_empty() {
            return EMPTY_AVERAGE_SENTINEL;
        }

        let total: i64 = self
            .employees
            .values()
            .map(|employee| i64::from(employee.years_enlisted_on(as_of)))
            .sum();

        total as f64 / self.employees.len() as f64
    }

    /// The mean years of service as of today.
    pub fn average_years_enlisted(&self) -> f64 {
        self.average_years_enlisted_on(Local::now().date_naive())
    }
}
