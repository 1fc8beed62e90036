//! In-memory progress store.
//!
//! Keeps the serialized blob rather than the struct, so loads go through the
//! same decoding path as the file store.

use crate::error::Result;
use crate::progress::UserProgress;

use super::codec;
use super::ProgressStore;

/// Process-local store holding one serialized progress blob.
#[derive(Debug, Default, Clone)]
pub struct MemoryProgressStore {
    blob: Option<String>,
    saves: usize,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw stored blob, as if written by an earlier session.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            saves: 0,
        }
    }

    /// The raw stored blob, if any.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ProgressStore for MemoryProgressStore {
    fn try_load(&self) -> Result<Option<UserProgress>> {
        self.blob
            .as_deref()
            .map(|blob| codec::decode(blob.as_bytes()))
            .transpose()
    }

    fn save(&mut self, progress: &UserProgress) -> Result<()> {
        self.blob = Some(codec::encode(progress)?);
        self.saves += 1;
        Ok(())
    }
}
