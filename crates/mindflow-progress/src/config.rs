//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the shipped behavior.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::ModuleCode;
use crate::error::{ProgressError, Result};

pub const DEFAULT_STANDARD_ANNOUNCE_DELAY_MS: u64 = 1500;
pub const DEFAULT_MASTER_ANNOUNCE_DELAY_MS: u64 = 2000;
pub const DEFAULT_MASTER_TITLE: &str = "Master NLP Practitioner (Clinical)";
pub const DEFAULT_STORAGE_KEY: &str = "nlp_lms_progress";

/// Tunables for completion, announcements and storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub standard_announce_delay_ms: u64,
    /// Must exceed the standard delay so the master credential lands last.
    pub master_announce_delay_ms: u64,
    /// Modules whose completion earns the master certificate.
    pub master_targets: Vec<ModuleCode>,
    pub master_title: String,
    pub storage_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            standard_announce_delay_ms: DEFAULT_STANDARD_ANNOUNCE_DELAY_MS,
            master_announce_delay_ms: DEFAULT_MASTER_ANNOUNCE_DELAY_MS,
            master_targets: ["ATMT_1", "ATMT_2", "ATMT_3", "ATMT_4", "ATMT_5", "ATMT_6"]
                .iter()
                .map(|c| ModuleCode::new(*c))
                .collect(),
            master_title: DEFAULT_MASTER_TITLE.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidConfig` if the file cannot be parsed or
    /// fails [`EngineConfig::validate`], or `ProgressError::Io` for other
    /// read failures.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(ProgressError::Io(e)),
        };

        let config: Self = serde_json::from_str(&json)
            .map_err(|e| ProgressError::InvalidConfig(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.master_announce_delay_ms <= self.standard_announce_delay_ms {
            return Err(ProgressError::InvalidConfig(format!(
                "master_announce_delay_ms ({}) must exceed standard_announce_delay_ms ({})",
                self.master_announce_delay_ms, self.standard_announce_delay_ms
            )));
        }
        if self.storage_key.is_empty()
            || self
                .storage_key
                .contains(|c: char| c == '/' || c == '\\' || c == '.')
        {
            return Err(ProgressError::InvalidConfig(format!(
                "storage_key must be a plain file stem, got {:?}",
                self.storage_key
            )));
        }
        Ok(())
    }

    pub fn standard_delay(&self) -> Duration {
        Duration::from_millis(self.standard_announce_delay_ms)
    }

    pub fn master_delay(&self) -> Duration {
        Duration::from_millis(self.master_announce_delay_ms)
    }
}
