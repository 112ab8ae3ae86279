//! Error types for the portfolio page behaviors

use thiserror::Error;

/// Main error type for portfolio page operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// A required element is not present in the host page
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// The email field did not match the accepted pattern
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    /// The relay endpoint answered with a non-OK status
    #[error("Relay responded with status {status}")]
    Relay { status: u16 },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The request was aborted after the configured timeout
    #[error("Submission timed out after {0} ms")]
    Timeout(u32),

    /// Reading or writing the theme preference failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// The embedded configuration document could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// A browser API call threw
    #[error("JavaScript error: {0}")]
    Js(String),

    /// A submission is already in flight
    #[error("A submission is already in progress")]
    Busy,
}

impl From<serde_json::Error> for PortfolioError {
    fn from(err: serde_json::Error) -> Self {
        PortfolioError::Config(err.to_string())
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
