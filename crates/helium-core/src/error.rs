// Rust guideline compliant 2026-10-14

//! Error types for the Helium core library.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for Helium operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error codes for structured error output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// No resource matched the reference.
    NotFound,
    /// The reference matched more than one resource.
    AmbiguousReference,
    /// A record or document had an unexpected shape.
    InvalidRecord,
    /// The request included invalid inputs.
    InvalidInput,
    /// Configuration could not be loaded or failed validation.
    ConfigError,
    /// IO failure while reading snapshot or configuration files.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// A fallback for unexpected errors.
    Unknown,
}

/// Error types for Helium operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The reference matched no record.
    #[error("no resource matches reference '{0}'")]
    NotFound(String),

    /// The reference matched several records.
    #[error("ambiguous id: '{reference}' ({})", .matches.join(", "))]
    AmbiguousReference {
        /// The reference as supplied by the user.
        reference: String,
        /// Shortened ids of every matching record, in encounter order.
        matches: Vec<String>,
    },

    /// A record or document did not have the expected shape.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Invalid user input, such as an empty reference.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Io(_) => ErrorCode::IoError,
            Error::Json(_) => ErrorCode::JsonError,
            Error::NotFound(_) => ErrorCode::NotFound,
            Error::AmbiguousReference { .. } => ErrorCode::AmbiguousReference,
            Error::InvalidRecord(_) => ErrorCode::InvalidRecord,
            Error::InvalidInput(_) => ErrorCode::InvalidInput,
            Error::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::NotFound(reference) => Some(serde_json::json!({
                "reference": reference,
            })),
            Error::AmbiguousReference { reference, matches } => Some(serde_json::json!({
                "reference": reference,
                "matches": matches,
            })),
            _ => None,
        }
    }
}
