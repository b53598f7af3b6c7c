//! Error types for the basis path harness.
//!
//! The classifier itself never fails; every error here originates in the
//! I/O and configuration layers surrounding it.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for harness operations.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV structure errors (bad header, wrong field count, unreadable record)
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A side length that does not parse as a number
    #[error("Invalid number for case {case_id}, column {column}: {value:?}")]
    InvalidNumber {
        case_id: String,
        column: &'static str,
        value: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        HarnessError::Serialization(err.to_string())
    }
}
