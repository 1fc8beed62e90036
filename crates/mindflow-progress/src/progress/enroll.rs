//! Enrollment: granting access to a module's content.

use crate::catalog::ModuleCode;

use super::types::UserProgress;

/// Enroll the learner in `code`.
///
/// Idempotent: returns `false` and leaves progress untouched if already
/// enrolled. Prerequisites are not checked here; callers decide access with
/// [`crate::catalog::module_status`] before enrolling.
pub fn enroll(progress: &mut UserProgress, code: &ModuleCode) -> bool {
    if progress.is_enrolled(code) {
        return false;
    }
    progress.enrolled_modules.push(code.clone());
    log::debug!("enrolled {} in {}", progress.user_id, code);
    true
}
