//! Error types for the Holiday Entitlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building employee records.

use thiserror::Error;

/// The main error type for the Holiday Entitlement Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use entitlement_engine::error::EngineError;
///
/// let error = EngineError::DateFormat {
///     input: "31131999".to_string(),
///     message: "not a valid calendar date".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date '31131999': expected DDMMYYYY (not a valid calendar date)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string did not parse as a valid `DDMMYYYY` calendar date.
    #[error("Invalid date '{input}': expected DDMMYYYY ({message})")]
    DateFormat {
        /// The text that failed to parse.
        input: String,
        /// A description of what made the text invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
