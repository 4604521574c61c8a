//! Error types for prose-vet-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when setting up a validation run.
///
/// Failures *inside* a single checker are not represented here — they are
/// isolated per checker and surface as diagnostics on the report (see
/// [`crate::validate`]), never aborting the run.
#[derive(Error, Debug)]
pub enum ValidateError {
    /// An unknown checker name was requested.
    #[error("unknown checker: {name}. Use: {available}")]
    UnknownChecker {
        /// The checker name that was requested.
        name: String,
        /// Comma-separated list of available checker names.
        available: String,
    },
}

/// Result type alias using [`ValidateError`].
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Internal failure of a single checker during rule evaluation.
///
/// Carries enough detail for the diagnostic recorded on the report; the
/// remaining checkers proceed unaffected.
#[derive(Error, Debug)]
#[error("{detail}")]
pub struct CheckerError {
    /// What went wrong inside the checker.
    pub detail: String,
}

impl CheckerError {
    /// Create a checker error from anything displayable.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
