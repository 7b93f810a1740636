//! Department code extraction from employee numbers.
//!
//! Employee numbers encode organizational metadata in their decimal digits:
//! the leading (most significant) digit of a 4+-digit number is the
//! department the employee works on.

/// Sentinel department code for employee numbers with fewer than 4 digits.
///
/// Such numbers carry no department information; they are treated as
/// malformed or unassigned rather than rejected.
pub const DEPARTMENT_UNASSIGNED: i32 = -1;

/// Extracts the department code from an employee number.
///
/// The code is the leading decimal digit of the number, computed by repeated
/// division so the decomposition stays numeric and locale-independent.
/// Numbers with fewer than 4 decimal digits (including zero and negative
/// numbers) yield [`DEPARTMENT_UNASSIGNED`].
///
/// # Examples
///
/// ```
/// use entitlement_engine::calculation::{department_code, DEPARTMENT_UNASSIGNED};
///
/// assert_eq!(department_code(1234), 1);
/// assert_eq!(department_code(98765), 9);
/// assert_eq!(department_code(42), DEPARTMENT_UNASSIGNED);
/// ```
pub fn department_code(number: i32) -> i32 {
    if number < 1000 {
        return DEPARTMENT_UNASSIGNED;
    }

    let mut leading = number;
    while leading >= 10 {
        leading /= 10;
    }
    leading
}
