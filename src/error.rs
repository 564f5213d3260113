//! Error types for the PAYE engine.
//!
//! The tax computation itself is total and never fails. These errors cover
//! the surfaces around it: loading a regime from disk and the caller-side
//! validation performed by the HTTP layer.

use thiserror::Error;

/// The main error type for the PAYE engine.
///
/// # Example
///
/// ```
/// use paye_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/bands.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/bands.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The band table of a regime is not usable for progressive taxation.
    #[error("Invalid band table: {message}")]
    InvalidBandTable {
        /// What is wrong with the table.
        message: String,
    },

    /// The relief parameters of a regime are out of range.
    #[error("Invalid relief configuration: {message}")]
    InvalidReliefConfig {
        /// Which parameter is wrong and why.
        message: String,
    },

    /// A compensation input failed caller-side validation.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
