//! Learner profile edits.

use serde::{Deserialize, Serialize};

use super::types::UserProgress;

/// Fields a learner may change. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub student_name: Option<String>,
    pub profile_image: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.student_name.is_none() && self.profile_image.is_none()
    }
}

/// Apply a profile update. Returns whether anything changed.
///
/// Issued certificates keep the name they were issued under.
pub fn update_profile(progress: &mut UserProgress, update: ProfileUpdate) -> bool {
    let mut changed = false;

    if let Some(name) = update.student_name {
        let name = name.trim().to_string();
        if name.is_empty() {
            log::warn!("ignoring empty student name for {}", progress.user_id);
        } else if name != progress.student_name {
            progress.student_name = name;
            changed = true;
        }
    }

    if let Some(image) = update.profile_image {
        if image != progress.profile_image {
            progress.profile_image = image;
            changed = true;
        }
    }

    changed
}
