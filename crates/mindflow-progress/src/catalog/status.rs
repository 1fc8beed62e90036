//! Availability of a module for a given learner.

use serde::{Deserialize, Serialize};

use crate::progress::UserProgress;

use super::types::Module;

/// How a module presents to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleStatus {
    Completed,
    /// Enrolled and open.
    Available,
    /// All prerequisites completed; can be purchased.
    ReadyToBuy,
    Locked,
}

impl ModuleStatus {
    pub fn as_tag(self) -> &'static str {
        match self {
            ModuleStatus::Completed => "completed",
            ModuleStatus::Available => "available",
            ModuleStatus::ReadyToBuy => "ready-to-buy",
            ModuleStatus::Locked => "locked",
        }
    }
}

impl std::fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Classify `module` against the learner's progress.
pub fn module_status(progress: &UserProgress, module: &Module) -> ModuleStatus {
    if progress.is_completed(&module.code) {
        return ModuleStatus::Completed;
    }
    if progress.is_enrolled(&module.code) {
        return ModuleStatus::Available;
    }

    let prerequisites_met = module
        .prerequisite_modules
        .iter()
        .all(|p| progress.is_completed(p));

    if prerequisites_met {
        ModuleStatus::ReadyToBuy
    } else {
        ModuleStatus::Locked
    }
}
