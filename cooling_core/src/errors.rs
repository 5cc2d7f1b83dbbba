//! # Error Types
//!
//! Structured error types for cooling_core. Every failure is either bad user
//! input (fix and re-run) or a filesystem problem; nothing is retried and
//! nothing is recovered locally. Errors bubble up to the CLI, which prints a
//! single diagnostic line and exits with status 1.
//!
//! ## Example
//!
//! ```rust
//! use cooling_core::errors::{CoolingError, CoolingResult};
//!
//! fn check_cost(cost: f64) -> CoolingResult<()> {
//!     if cost <= 0.0 {
//!         return Err(CoolingError::invalid_input(
//!             "electricity_cost",
//!             cost.to_string(),
//!             "cost must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_cost(0.0).unwrap_err();
//! assert_eq!(err.to_string(), "InvalidInput: cost must be positive");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cooling_core operations
pub type CoolingResult<T> = Result<T, CoolingError>;

/// Operation label used when the output directory cannot be created
pub const OP_CREATE_DIR: &str = "cannot create output directory";

/// Operation label used when an artifact cannot be written
pub const OP_WRITE_FILE: &str = "cannot write file";

/// Operation label used when a file cannot be read back
pub const OP_READ_FILE: &str = "cannot read file";

/// Structured error type for the savings pipeline.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CoolingError {
    /// A validation rule rejected an input parameter
    #[error("InvalidInput: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Directory creation, file write or file read failed
    #[error("IOError: {operation} '{path}': {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON or CSV encoding/decoding failed
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings file could not be parsed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },
}

impl CoolingError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CoolingError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CoolingError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CoolingError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CoolingError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CoolingError::InvalidInput { .. } => "INVALID_INPUT",
            CoolingError::FileError { .. } => "FILE_ERROR",
            CoolingError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CoolingError::ConfigError { .. } => "CONFIG_ERROR",
        }
    }

    /// Process exit status for this error. Every failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
