//! Custom error types for MoneyTrack
//!
//! Business warnings (budget exceeded, negative balance) are not errors and
//! never appear here; they travel alongside successful mutations.

use thiserror::Error;

/// The main error type for MoneyTrack operations
#[derive(Error, Debug)]
pub enum MoneyTrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input (bad amount, missing category, bad login)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Unknown login or wrong password
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MoneyTrackError {
    /// Create a "not found" error for users
    pub fn user_not_found(login: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "User",
            identifier: login.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for MoneyTrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MoneyTrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for MoneyTrack operations
pub type MoneyTrackResult<T> = Result<T, MoneyTrackError>;
