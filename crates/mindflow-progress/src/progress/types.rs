//! The learner progress aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::builtin::ORIENTATION;
use crate::catalog::ModuleCode;
use crate::certificate::Certificate;

pub const DEFAULT_USER_ID: &str = "user_123";
pub const DEFAULT_STUDENT_NAME: &str = "Alex Johnson";
pub const DEFAULT_PROFILE_IMAGE: &str =
    "https://api.dicebear.com/7.x/avataaars/svg?seed=Alex&backgroundColor=b6e3f4";

/// Everything recorded about one learner.
///
/// Serialized with camelCase field names; this is the persisted shape.
/// `enrolled_modules` and `completed_modules` are insertion-ordered and
/// duplicate-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: String,
    pub student_name: String,
    pub profile_image: String,
    pub enrolled_modules: Vec<ModuleCode>,
    pub completed_modules: Vec<ModuleCode>,
    pub quiz_scores: BTreeMap<ModuleCode, u32>,
    /// Issuance order.
    pub certificates: Vec<Certificate>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            student_name: DEFAULT_STUDENT_NAME.to_string(),
            profile_image: DEFAULT_PROFILE_IMAGE.to_string(),
            enrolled_modules: vec![ModuleCode::new(ORIENTATION)],
            completed_modules: Vec::new(),
            quiz_scores: BTreeMap::new(),
            certificates: Vec::new(),
        }
    }
}

impl UserProgress {
    /// Fresh progress for a named learner, pre-enrolled in orientation.
    pub fn new(user_id: impl Into<String>, student_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            student_name: student_name.into(),
            ..Self::default()
        }
    }

    pub fn is_enrolled(&self, code: &ModuleCode) -> bool {
        self.enrolled_modules.contains(code)
    }

    pub fn is_completed(&self, code: &ModuleCode) -> bool {
        self.completed_modules.contains(code)
    }

    pub fn score(&self, code: &ModuleCode) -> Option<u32> {
        self.quiz_scores.get(code).copied()
    }

    /// Whether every completed module is also enrolled.
    pub fn is_consistent(&self) -> bool {
        self.completed_modules
            .iter()
            .all(|c| self.enrolled_modules.contains(c))
    }
}
