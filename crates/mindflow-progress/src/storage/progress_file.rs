//! Progress persistence: store and retrieve the `UserProgress` blob.
//!
//! The aggregate is stored as a single JSON file named `{storage_key}.json`
//! inside the configured base directory.
//!
//! File format:
//! ```json
//! {
//!     "version": 1,
//!     "progress": { ... UserProgress ... }
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::error::{ProgressError, Result};
use crate::progress::UserProgress;

use super::codec;
use super::ProgressStore;

/// Filesystem-backed store for one learner's progress.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a crash mid-write leaves the previous state intact. The store
/// is safe for single-process use; concurrent writers are not coordinated.
#[derive(Debug, Clone)]
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    /// Create a store for `{base_dir}/{storage_key}.json`.
    ///
    /// The directory and any missing parents are created if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Io` if the directory cannot be created.
    pub fn new(base_dir: impl Into<PathBuf>, storage_key: &str) -> Result<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self {
            path: base_dir.join(format!("{storage_key}.json")),
        })
    }

    /// Path of the stored file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the stored file. No-op if absent.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ProgressError::Io(e)),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ProgressStore for FileProgressStore {
    fn try_load(&self) -> Result<Option<UserProgress>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ProgressError::Io(e)),
        };

        codec::decode(&bytes).map(Some).map_err(|e| match e {
            ProgressError::InvalidFileFormat(msg) => {
                ProgressError::InvalidFileFormat(format!("{}: {msg}", self.path.display()))
            }
            other => other,
        })
    }

    fn save(&mut self, progress: &UserProgress) -> Result<()> {
        let json = codec::encode(progress)?;

        let tmp = self.temp_path();
        std::fs::write(&tmp, json.as_bytes())?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            if let Err(cleanup) = std::fs::remove_file(&tmp) {
                log::warn!("failed to remove {}: {cleanup}", tmp.display());
            }
            return Err(ProgressError::StorageError(format!(
                "failed to replace {}: {e}",
                self.path.display()
            )));
        }

        log::debug!("saved progress for {} to {}", progress.user_id, self.path.display());
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
