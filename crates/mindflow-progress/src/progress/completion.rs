//! Completion engine: recording quiz outcomes, unlocking, and certifying.

use crate::catalog::{ModuleCatalog, ModuleCode};
use crate::certificate::{self, Certificate};
use crate::config::EngineConfig;
use crate::notify::Announcement;

use super::types::UserProgress;

/// What a single completion event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub code: ModuleCode,
    pub score: u32,
    /// False when the module had already been completed before.
    pub newly_completed: bool,
    /// Modules auto-enrolled by this completion, in unlock order.
    pub newly_unlocked: Vec<ModuleCode>,
    /// Certificates appended by this completion, in issuance order.
    pub issued: Vec<Certificate>,
    /// The one certificate the UI should surface, if any.
    pub announcement: Option<Announcement>,
}

/// Record that the learner finished `code` with `score`.
///
/// The score is always recorded, overwriting any earlier score, and is not
/// compared with the module's passing score. Certificates are issued only on
/// the first completion of a non-introduction module. An unknown code
/// soft-fails: nothing is unlocked and the certificate title is empty. The
/// reserved [`ModuleCode::MASTER`] code is recorded but never certified.
pub fn complete(
    progress: &mut UserProgress,
    catalog: &ModuleCatalog,
    config: &EngineConfig,
    code: &ModuleCode,
    score: u32,
) -> CompletionOutcome {
    let newly_completed = !progress.is_completed(code);

    if newly_completed {
        if !progress.is_enrolled(code) {
            progress.enrolled_modules.push(code.clone());
        }
        progress.completed_modules.push(code.clone());
    }
    progress.quiz_scores.insert(code.clone(), score);

    let module = catalog.get(code);
    if module.is_none() {
        log::warn!("completed unknown module {code}; no unlocks, empty certificate title");
    }

    // Unlocks are applied on every completion, not just the first.
    let mut newly_unlocked = Vec::new();
    if let Some(module) = module {
        for unlocked in &module.unlocks_modules {
            if !progress.is_enrolled(unlocked) {
                progress.enrolled_modules.push(unlocked.clone());
                newly_unlocked.push(unlocked.clone());
            }
        }
    }

    // The master sentinel is minted only by the eligibility check below.
    let reserved = code.is_master();
    if reserved {
        log::warn!("completion recorded for reserved code {code}; no certificate issued");
    }
    let certifiable = !reserved && module.map_or(true, |m| m.level.is_certifiable());

    let mut issued = Vec::new();
    let mut announcement = None;

    if newly_completed && certifiable {
        let title = module.map(|m| m.title.as_str()).unwrap_or_default();
        let student_name = progress.student_name.clone();
        let standard = certificate::issue(progress, code, title, &student_name, false);
        issued.push(standard.clone());

        let master = if !certificate::has_master(&progress.certificates)
            && certificate::master_eligible(&progress.completed_modules, &config.master_targets)
        {
            let master_title = config.master_title.clone();
            let master = certificate::issue(progress, code, &master_title, &student_name, true);
            issued.push(master.clone());
            Some(master)
        } else {
            None
        };

        announcement = Some(Announcement::for_completion(standard, master, config));
    }

    CompletionOutcome {
        code: code.clone(),
        score,
        newly_completed,
        newly_unlocked,
        issued,
        announcement,
    }
}
