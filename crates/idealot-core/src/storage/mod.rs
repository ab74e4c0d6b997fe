mod config;
mod document;

pub use config::{BoardConfig, Config, ReviewConfig};
pub use document::{BoardDocument, SaveOutcome, DOCUMENT_FILE};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/idealot[-dev]/` based on IDEALOT_ENV.
///
/// Set IDEALOT_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("IDEALOT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("idealot-dev")
    } else {
        base_dir.join("idealot")
    };

    std::fs::create_dir_all(&dir).map_err(|err| StorageError::DataDirUnavailable {
        message: format!("cannot create {}: {err}", dir.display()),
    })?;
    Ok(dir)
}
