//! Error types for checkpost operations.
//!
//! This module defines [`CheckpostError`], the error type for conditions that
//! abort a run before or outside of check execution, and a [`Result`] type
//! alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures are never errors at this level: the runner turns them
//!   into failed check results (see [`crate::checklist::FailureKind`])
//! - Use `CheckpostError` for configuration and checklist construction
//!   problems that must surface immediately
//! - Use `anyhow::Error` (via `CheckpostError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for checkpost operations.
#[derive(Debug, Error)]
pub enum CheckpostError {
    /// Checklist file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse checklist file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The checklist itself is malformed (empty, duplicate ids, bad threshold).
    #[error("Invalid checklist: {message}")]
    InvalidChecklist { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for checkpost operations.
pub type Result<T> = std::result::Result<T, CheckpostError>;
