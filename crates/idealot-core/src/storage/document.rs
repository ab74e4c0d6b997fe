//! Flat-JSON board document.
//!
//! The whole card set is one pretty-printed JSON document in the per-user
//! data directory, same file name and shape the original desktop app used.
//! Reads never fail outward: a missing or malformed document yields an
//! empty board and a logged warning. Writes report an outcome rather than
//! an error so callers can stay fire-and-forget.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::board::Card;
use crate::error::{CoreError, StorageError};

pub const DOCUMENT_FILE: &str = "idea-parking-lot.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardDocument {
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Result of a save attempt, mirroring the gateway contract
/// `{ success, error? }`.
#[derive(Debug, Clone, Serialize)]
pub struct SaveOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BoardDocument {
    pub fn path() -> Result<PathBuf, StorageError> {
        Ok(data_dir()?.join(DOCUMENT_FILE))
    }

    /// Load the document from the default location. Never fails: any read
    /// or parse problem is logged and yields an empty board.
    pub fn load() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(err) => {
                log::warn!("board document location unavailable, starting empty: {err}");
                Self::default()
            }
        }
    }

    /// Load from an explicit path with the same recovery semantics.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(doc) => doc,
            Err(err) => {
                log::warn!(
                    "board document at {} unreadable, starting empty: {err}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self, CoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist to the default location.
    ///
    /// # Errors
    /// Returns an error if the document cannot be serialized or written.
    pub fn save(&self) -> Result<(), CoreError> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| StorageError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Fire-and-forget save: failures are logged, never surfaced. The
    /// in-memory store stays authoritative either way.
    pub fn flush(&self) -> SaveOutcome {
        Self::outcome_of(self.save())
    }

    /// Same contract as [`flush`](Self::flush) against an explicit path.
    pub fn flush_to(&self, path: &Path) -> SaveOutcome {
        Self::outcome_of(self.save_to(path))
    }

    fn outcome_of(result: Result<(), CoreError>) -> SaveOutcome {
        match result {
            Ok(()) => SaveOutcome {
                success: true,
                error: None,
            },
            Err(err) => {
                log::warn!("board document save failed: {err}");
                SaveOutcome {
                    success: false,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}
