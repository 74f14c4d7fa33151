//! Unified application error type
//!
//! Local errors (validation, store access, arithmetic degradations that
//! must be reported) share one enum so every fallible API in the
//! workspace returns [`AppResult`]. Network errors live in the client
//! crate; they carry transport detail this type does not need.

use thiserror::Error;

/// Application error
#[derive(Debug, Error)]
pub enum AppError {
    /// Input validation failed; submission must be blocked locally
    #[error("{message}")]
    Validation {
        /// Field that failed validation, for inline display
        field: String,
        message: String,
    },

    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Business rule violation
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Local store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a Validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a BusinessRule error
    pub fn business_rule(message: impl Into<String>) -> Self {
        Self::BusinessRule(message.into())
    }

    /// Create a Store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Field the error is attached to, when it is a validation error
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
