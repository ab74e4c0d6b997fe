//! Core error types for idealot-core.
//!
//! The worst failure mode in this system is losing unsaved changes; nothing
//! here is fatal. Persistence failures are recovered locally and logged,
//! and invalid operation inputs are rejected before they touch the store.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for idealot-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Board document storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Board document storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The per-user data directory could not be determined or created
    #[error("Data directory unavailable: {message}")]
    DataDirUnavailable { message: String },

    /// Writing the board document failed
    #[error("Failed to write board document at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Card text is empty after trimming
    #[error("Card text cannot be empty")]
    EmptyText,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
