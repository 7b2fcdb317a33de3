//! Error types and handling
//!
//! This module contains the error type shared by table lookups, the CSV table
//! builder, and table import/export.

use thiserror::Error;

/// Errors that can occur while reading or building a facility table
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The queried state name is not a key of the table
    #[error("State not found: {0}")]
    NotFound(String),

    /// The requested category is neither "large" nor "small"
    #[error("Invalid category: {0} (expected \"large\" or \"small\")")]
    InvalidCategory(String),

    /// A table loaded or built from external input broke a table invariant
    #[error("Invalid facility table: {0}")]
    InvalidTable(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV reading error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl DirectoryError {
    /// Create a not-found error for a state name
    pub fn not_found(state: impl Into<String>) -> Self {
        Self::NotFound(state.into())
    }

    /// Create an invalid category error
    pub fn invalid_category(category: impl Into<String>) -> Self {
        Self::InvalidCategory(category.into())
    }

    /// Create an invalid table error
    pub fn invalid_table(msg: impl Into<String>) -> Self {
        Self::InvalidTable(msg.into())
    }

    /// Whether this error came from a lookup against the table rather than from I/O or input
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, DirectoryError::NotFound(_) | DirectoryError::InvalidCategory(_))
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            DirectoryError::NotFound(_) => "Not Found",
            DirectoryError::InvalidCategory(_) => "Invalid Category",
            DirectoryError::InvalidTable(_) => "Invalid Table",
            DirectoryError::IoError(_) => "IO",
            DirectoryError::CsvError(_) => "CSV",
            DirectoryError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
