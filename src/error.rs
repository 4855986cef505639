//! Error types for HotelWizard.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the dashboard and the budget estimator can report.

use thiserror::Error;

/// The main error type for HotelWizard.
///
/// Every fallible operation in the crate returns this error type, so the
/// HTTP layer and the CLI can handle failures in one place.
///
/// # Example
///
/// ```
/// use hotel_wizard::error::WizardError;
///
/// let error = WizardError::InvalidInput {
///     field: "room_count".to_string(),
///     message: "must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input for 'room_count': must be greater than zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum WizardError {
    /// A user-supplied value was non-numeric, zero or negative.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of why the value was rejected.
        message: String,
    },

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

    /// Configuration parsed but its contents are inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the inconsistency.
        message: String,
    },

    /// A dataset file was not found.
    #[error("Dataset file not found: {path}")]
    DatasetNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A dataset file could not be read as CSV.
    #[error("Failed to read dataset '{path}': {message}")]
    DatasetParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No chart exists with the requested id.
    #[error("Chart not found: {id}")]
    ChartNotFound {
        /// The chart id that was requested.
        id: String,
    },
}

impl WizardError {
    /// Shorthand for an [`WizardError::InvalidInput`] on `field`.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return WizardError.
pub type WizardResult<T> = Result<T, WizardError>;
