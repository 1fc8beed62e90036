//! Storage layer for learner progress.
//!
//! The engine only defines the read/write contract ([`ProgressStore`]);
//! where the blob lives is up to the implementation.
//!
//! # Layout
//!
//! By convention the default root is `~/.mindflow/`, holding one file named
//! after the configured storage key:
//!
//! ```text
//! ~/.mindflow/
//! └── nlp_lms_progress.json
//! ```
//!
//! # Modules
//!
//! - [`progress_file`]: JSON file store with atomic replace.
//! - [`memory`]: in-process store for tests and embedding.

pub mod memory;
pub mod progress_file;

pub use memory::MemoryProgressStore;
pub use progress_file::FileProgressStore;

use crate::error::Result;
use crate::progress::UserProgress;

/// Format version written alongside the stored progress.
pub const PROGRESS_FILE_VERSION: u32 = 1;

/// Persistence contract for the single progress aggregate.
pub trait ProgressStore {
    /// Read stored progress. `Ok(None)` means nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if stored state exists but cannot be read or decoded.
    fn try_load(&self) -> Result<Option<UserProgress>>;

    /// Replace the stored progress. Must be atomic: a reader sees either the
    /// previous blob or the new one.
    fn save(&mut self, progress: &UserProgress) -> Result<()>;

    /// Read stored progress, falling back to defaults.
    ///
    /// Absent state yields [`UserProgress::default`]. Unreadable or malformed
    /// state is discarded with a warning rather than failing startup.
    fn load(&self) -> UserProgress {
        match self.try_load() {
            Ok(Some(progress)) => progress,
            Ok(None) => {
                log::debug!("no stored progress, starting fresh");
                UserProgress::default()
            }
            Err(e) => {
                log::warn!("discarding unreadable progress state: {e}");
                UserProgress::default()
            }
        }
    }
}

pub(crate) mod codec {
    //! Shared (de)serialization of the stored blob.

    use serde::{Deserialize, Serialize};

    use super::PROGRESS_FILE_VERSION;
    use crate::error::{ProgressError, Result};
    use crate::progress::UserProgress;

    /// Wrapper written for each stored progress blob.
    #[derive(Debug, Serialize, Deserialize)]
    struct ProgressFile {
        /// Format version number.
        version: u32,
        /// The stored aggregate.
        progress: UserProgress,
    }

    /// Accepts either shape; bare objects come from older writers.
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredShape {
        Wrapped(ProgressFile),
        Bare(UserProgress),
    }

    pub(crate) fn encode(progress: &UserProgress) -> Result<String> {
        let file = ProgressFile {
            version: PROGRESS_FILE_VERSION,
            progress: progress.clone(),
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| ProgressError::SerializationError(e.to_string()))
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<UserProgress> {
        let shape: StoredShape = serde_json::from_slice(bytes)
            .map_err(|e| ProgressError::InvalidFileFormat(format!("progress state: {e}")))?;

        match shape {
            StoredShape::Wrapped(file) if file.version > PROGRESS_FILE_VERSION => {
                Err(ProgressError::InvalidFileFormat(format!(
                    "progress state version {} is newer than supported {}",
                    file.version, PROGRESS_FILE_VERSION
                )))
            }
            StoredShape::Wrapped(file) => Ok(file.progress),
            StoredShape::Bare(progress) => Ok(progress),
        }
    }
}
