//! Learner session: the single writer over one learner's progress.
//!
//! Every mutation is applied to a working copy, persisted, and only then
//! committed and announced. A failed save leaves both the in-memory and the
//! stored progress unchanged, and schedules nothing.

use crate::catalog::{self, ModuleCatalog, ModuleCode, ModuleStatus};
use crate::certificate::{self, Certificate};
use crate::config::EngineConfig;
use crate::error::{ProgressError, Result};
use crate::notify::{AnnouncementHandle, NotificationScheduler, ProgressEvent};
use crate::progress::{self, CompletionOutcome, ProfileUpdate, ProgressSummary, UserProgress};
use crate::storage::ProgressStore;

/// Owns one learner's progress for the lifetime of a session.
pub struct LearnerSession<S: ProgressStore> {
    progress: UserProgress,
    catalog: ModuleCatalog,
    config: EngineConfig,
    store: S,
    scheduler: NotificationScheduler,
}

impl<S: ProgressStore> LearnerSession<S> {
    /// Load stored progress (or defaults) and start a session.
    ///
    /// Stored progress whose completed set is not contained in its enrolled
    /// set is repaired by enrolling the missing modules.
    pub fn open(
        store: S,
        catalog: ModuleCatalog,
        config: EngineConfig,
        scheduler: NotificationScheduler,
    ) -> Self {
        let mut progress = store.load();

        if !progress.is_consistent() {
            log::warn!(
                "stored progress for {} has completions outside enrollments; repairing",
                progress.user_id
            );
            let missing: Vec<ModuleCode> = progress
                .completed_modules
                .iter()
                .filter(|c| !progress.enrolled_modules.contains(c))
                .cloned()
                .collect();
            progress.enrolled_modules.extend(missing);
        }

        Self {
            progress,
            catalog,
            config,
            store,
            scheduler,
        }
    }

    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Enroll in `code`. Returns whether the module was newly added.
    ///
    /// A repeated enrollment is a no-op: nothing is saved or emitted.
    pub fn enroll(&mut self, code: &ModuleCode) -> Result<bool> {
        let mut next = self.progress.clone();
        if !progress::enroll(&mut next, code) {
            return Ok(false);
        }

        self.commit(next)?;
        self.scheduler
            .emit(ProgressEvent::ModuleEnrolled { code: code.clone() });
        Ok(true)
    }

    /// Record a completion of `code` with `score`.
    ///
    /// Emits `ModuleCompleted` immediately and schedules at most one
    /// certificate announcement.
    pub fn complete(&mut self, code: &ModuleCode, score: u32) -> Result<CompletionOutcome> {
        let mut next = self.progress.clone();
        let outcome = progress::complete(&mut next, &self.catalog, &self.config, code, score);

        self.commit(next)?;
        self.scheduler.emit(ProgressEvent::ModuleCompleted {
            code: code.clone(),
            score,
            progress: Box::new(self.progress.clone()),
        });

        if let Some(announcement) = &outcome.announcement {
            self.scheduler.announce(announcement.clone());
        }

        Ok(outcome)
    }

    /// Grade quiz answers for `code` and record the completion.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownModule` if `code` has no quiz in the
    /// catalog, plus any storage error from [`LearnerSession::complete`].
    pub fn submit_quiz(
        &mut self,
        code: &ModuleCode,
        answers: &[Option<usize>],
    ) -> Result<CompletionOutcome> {
        let score = {
            let module = self.catalog.require(code)?;
            catalog::grade(&module.quiz_questions, answers)
        };
        self.complete(code, score)
    }

    /// Apply a profile edit. Returns whether anything changed.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<bool> {
        let mut next = self.progress.clone();
        if !progress::update_profile(&mut next, update) {
            return Ok(false);
        }

        self.commit(next)?;
        self.scheduler.emit(ProgressEvent::ProfileUpdated {
            student_name: self.progress.student_name.clone(),
            profile_image: self.progress.profile_image.clone(),
        });
        Ok(true)
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Resolve a verification token to a certificate.
    pub fn resolve(&self, token: &str) -> Option<&Certificate> {
        certificate::lookup(&self.progress.certificates, token)
    }

    /// Status of a catalog module for this learner.
    pub fn status(&self, code: &ModuleCode) -> Option<ModuleStatus> {
        self.catalog
            .get(code)
            .map(|m| catalog::module_status(&self.progress, m))
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::compute(&self.progress, &self.catalog)
    }

    // ── Announcements ─────────────────────────────────────────────────────────

    /// Re-announce an already issued certificate, e.g. when the learner opens
    /// it from their certificate list. Master certificates use the master
    /// delay, all others the standard delay.
    pub fn reannounce(&mut self, token: &str) -> Option<AnnouncementHandle> {
        let certificate = self.resolve(token)?.clone();
        let delay = if certificate.is_master() {
            self.config.master_delay()
        } else {
            self.config.standard_delay()
        };
        Some(
            self.scheduler
                .announce(crate::notify::Announcement { certificate, delay }),
        )
    }

    pub fn pending_announcements(&self) -> usize {
        self.scheduler.pending()
    }

    /// Cancel announcements that have not fired, e.g. on navigation away.
    pub fn cancel_announcements(&mut self) -> usize {
        self.scheduler.cancel_all()
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Persist `next`, then make it the current progress.
    fn commit(&mut self, next: UserProgress) -> Result<()> {
        debug_assert!(next.is_consistent());
        self.store.save(&next).map_err(|e| match e {
            ProgressError::Io(io) => {
                ProgressError::StorageError(format!("failed to persist progress: {io}"))
            }
            other => other,
        })?;
        self.progress = next;
        Ok(())
    }
}
