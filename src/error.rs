//! Error types for the payroll register.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the rule engine, record store and application layer
//! can surface.

use thiserror::Error;

/// The main error type for the payroll register.
///
/// All fallible operations return this error type so callers can present
/// failures consistently.
///
/// # Example
///
/// ```
/// use payroll_register::error::PayrollError;
///
/// let error = PayrollError::DuplicateKey {
///     field: "nik".to_string(),
///     value: "3201010101010001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Duplicate nik: 3201010101010001");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The backing store could not be opened or failed during an operation.
    #[error("Storage unavailable: {message}")]
    StorageUnavailable {
        /// A description of the storage failure.
        message: String,
    },

    /// A write would violate a uniqueness constraint.
    #[error("Duplicate {field}: {value}")]
    DuplicateKey {
        /// The constrained field (`nik` or `id`).
        field: String,
        /// The offending value.
        value: String,
    },

    /// No record exists with the referenced identifier.
    #[error("Employee not found: {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A required field was missing or invalid.
    #[error("Invalid field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// An export was requested but there are no records.
    #[error("No employee records to export")]
    NothingToExport,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Shorthand for a missing required field.
    pub fn required(field: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: "is required".to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
