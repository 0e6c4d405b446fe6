//! Custom error types for MyLedger
//!
//! This module defines the error hierarchy for the ledger core using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for MyLedger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate line-item errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// A persisted document carries a version with no registered codec
    #[error("Unsupported ledger file version: {version}")]
    UnsupportedVersion { version: u32 },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a duplicate error for static line items
    pub fn duplicate_static(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Static item",
            identifier: identifier.into(),
        }
    }

    /// Create a duplicate error for variable line items
    pub fn duplicate_variable(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Variable item",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is an unsupported-version error
    pub fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::UnsupportedVersion { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for MyLedger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
