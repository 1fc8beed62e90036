//! Headline progress figures for display.

use serde::{Deserialize, Serialize};

use crate::catalog::ModuleCatalog;
use crate::certificate;

use super::types::UserProgress;

/// Completed-module count at which the learner is titled a master.
pub const MASTER_RANK_THRESHOLD: usize = 6;

pub const MASTER_RANK: &str = "Master Practitioner";
pub const DEFAULT_RANK: &str = "Practitioner Path";

/// Aggregated view of a learner's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub enrolled: usize,
    pub completed: usize,
    pub certificates: usize,
    pub has_master: bool,
    /// Completion percentage over the catalog, excluding orientation.
    pub percent: u32,
    pub rank: String,
}

impl ProgressSummary {
    pub fn compute(progress: &UserProgress, catalog: &ModuleCatalog) -> Self {
        let completed = progress.completed_modules.len();
        let denominator = catalog.len().saturating_sub(1).max(1);
        let percent = ((completed as f64 / denominator as f64) * 100.0)
            .round()
            .min(100.0) as u32;

        let rank = if completed >= MASTER_RANK_THRESHOLD {
            MASTER_RANK
        } else {
            DEFAULT_RANK
        };

        Self {
            enrolled: progress.enrolled_modules.len(),
            completed,
            certificates: progress.certificates.len(),
            has_master: certificate::has_master(&progress.certificates),
            percent,
            rank: rank.to_string(),
        }
    }
}
