//! Unified error type for TableNow
//!
//! The core is deliberately permissive (see the store contract), so this
//! surface is small: validation failures raised by the booking layer,
//! unsupported operations, and internal faults.

use thiserror::Error;

/// Application error with a stable code and a human-readable message
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

/// Standardized error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Caller-side input validation failed
    ValidationFailed,
    /// Resource lookup missed where the caller required a hit
    NotFound,
    /// Operation is intentionally not implemented
    Unsupported,
    /// Internal fault
    InternalError,
}

impl ErrorCode {
    /// Default message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::Unsupported => "Operation not supported",
            Self::InternalError => "Internal error",
        }
    }
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// Create an unsupported-operation error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::Unsupported, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;
