//! Holiday Entitlement Engine for HR employee records.
//!
//! This crate models a small set of business records (employees and the
//! company that employs them) and computes the derived HR metrics used for
//! leave administration: age, years of service, department codes, and
//! holiday-day entitlements.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
