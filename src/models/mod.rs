//! Core data models for the Holiday Entitlement Engine.
//!
//! This module contains the domain records: the [`Employee`] value object
//! and the [`Company`] registry that aggregates over it.

mod company;
mod employee;

pub use company::{Company, EMPTY_AVERAGE_SENTINEL};
pub use employee::Employee;
