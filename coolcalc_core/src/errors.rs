//! # Error Types
//!
//! Structured error types for coolcalc_core. The heat-load aggregator itself
//! is infallible; these errors cover the export pipeline (report generation,
//! file output, sharing) and advisory input validation.
//!
//! ## Example
//!
//! ```rust
//! use coolcalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_m: f64) -> CalcResult<()> {
//!     if length_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "length".to_string(),
//!             value: length_m.to_string(),
//!             reason: "Room length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for coolcalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for report and export operations.
///
/// Each variant provides specific context about what went wrong. The export
/// pipeline collapses all of them into a single generic user-facing alert,
/// but the structured form is kept for logs and tests.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Report document templating failed
    #[error("Report generation failed: {reason}")]
    ReportGeneration { reason: String },

    /// The platform share capability is not available
    #[error("Sharing is not available on this device")]
    ShareUnavailable,

    /// The platform rejected the share request
    #[error("Share failed: {reason}")]
    ShareFailed { reason: String },

    /// File I/O error while producing the report file
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ReportGeneration error
    pub fn report_generation(reason: impl Into<String>) -> Self {
        CalcError::ReportGeneration {
            reason: reason.into(),
        }
    }

    /// Create a ShareFailed error
    pub fn share_failed(reason: impl Into<String>) -> Self {
        CalcError::ShareFailed {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ReportGeneration { .. } => "REPORT_GENERATION",
            CalcError::ShareUnavailable => "SHARE_UNAVAILABLE",
            CalcError::ShareFailed { .. } => "SHARE_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
