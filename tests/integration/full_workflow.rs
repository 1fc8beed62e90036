//! Integration test: full end-to-end learner workflow.
//!
//! Tests the complete lifecycle:
//! 1. Fresh learner with orientation pre-enrolled
//! 2. Orientation completion (no certificate, unlocks the core)
//! 3. Core completion (certificate, fan-out to specializations)
//! 4. Specializations through to the master credential
//! 5. Public verification by token

use mindflow_progress::catalog::builtin::{CORE, ORIENTATION, SPECIALIZATIONS};
use mindflow_progress::certificate::{self, lookup, verify};
use mindflow_progress::notify::AnnouncementKind;
use mindflow_progress::progress::{complete, enroll};
use mindflow_progress::{EngineConfig, ModuleCatalog, ModuleCode, ModuleStatus, UserProgress};

fn code(s: &str) -> ModuleCode {
    ModuleCode::new(s)
}

#[test]
fn full_workflow_orientation_to_master() {
    let catalog = ModuleCatalog::builtin();
    let config = EngineConfig::default();

    // ── Step 1: Fresh learner ───────────────────────────────────────────
    let mut progress = UserProgress::default();
    assert_eq!(progress.enrolled_modules, vec![code(ORIENTATION)]);
    assert!(progress.completed_modules.is_empty());

    // ── Step 2: Orientation ─────────────────────────────────────────────
    let outcome = complete(&mut progress, &catalog, &config, &code(ORIENTATION), 100);
    assert!(outcome.issued.is_empty(), "orientation must not certify");
    assert!(outcome.announcement.is_none());
    assert_eq!(progress.completed_modules, vec![code(ORIENTATION)]);
    assert!(progress.is_enrolled(&code(CORE)));

    // ── Step 3: Core ────────────────────────────────────────────────────
    let outcome = complete(&mut progress, &catalog, &config, &code(CORE), 85);
    assert_eq!(outcome.issued.len(), 1);
    assert_eq!(outcome.issued[0].module_code, code(CORE));
    for s in SPECIALIZATIONS {
        assert!(progress.is_enrolled(&code(s)), "{s} should be unlocked");
        let module = catalog.get(&code(s)).unwrap();
        assert_eq!(
            mindflow_progress::catalog::module_status(&progress, module),
            ModuleStatus::Available
        );
    }
    assert_eq!(
        outcome.announcement.as_ref().map(|a| a.kind()),
        Some(AnnouncementKind::Standard)
    );

    // ── Step 4: Specializations ─────────────────────────────────────────
    for (i, s) in SPECIALIZATIONS.iter().enumerate() {
        let outcome = complete(&mut progress, &catalog, &config, &code(s), 80 + i as u32);
        let announcement = outcome.announcement.expect("every first completion announces");

        if i + 1 < SPECIALIZATIONS.len() {
            assert_eq!(announcement.kind(), AnnouncementKind::Standard);
            assert_eq!(announcement.certificate.module_code, code(s));
        } else {
            assert_eq!(announcement.kind(), AnnouncementKind::Master);
            assert_eq!(announcement.delay, config.master_delay());
            // The sixth standard certificate is still recorded
            assert!(certificate::find_for_module(&progress.certificates, &code(s)).is_some());
        }
    }

    let masters: Vec<_> = progress.certificates.iter().filter(|c| c.is_master()).collect();
    assert_eq!(masters.len(), 1);
    assert_eq!(progress.certificates.len(), 7);

    // ── Step 5: Verification ────────────────────────────────────────────
    for cert in &progress.certificates {
        let found = lookup(&progress.certificates, cert.verification_token.as_str())
            .expect("issued token must resolve");
        assert_eq!(found, cert);
        assert!(verify(found).is_valid);
    }
    assert!(lookup(&progress.certificates, "never-issued").is_none());
}

#[test]
fn enroll_twice_leaves_enrollments_unchanged() {
    let mut progress = UserProgress::default();
    enroll(&mut progress, &code(CORE));
    let snapshot = progress.enrolled_modules.clone();
    enroll(&mut progress, &code(CORE));
    assert_eq!(progress.enrolled_modules, snapshot);
}

#[test]
fn recompletion_records_latest_score() {
    let catalog = ModuleCatalog::builtin();
    let config = EngineConfig::default();
    let mut progress = UserProgress::default();

    complete(&mut progress, &catalog, &config, &code("ATMT_3"), 70);
    let completed = progress.completed_modules.clone();
    complete(&mut progress, &catalog, &config, &code("ATMT_3"), 92);

    assert_eq!(progress.completed_modules, completed);
    assert_eq!(progress.score(&code("ATMT_3")), Some(92));
}

#[test]
fn master_present_iff_all_targets_completed() {
    let catalog = ModuleCatalog::builtin();
    let config = EngineConfig::default();
    let mut progress = UserProgress::default();

    for target in &config.master_targets {
        assert!(!certificate::has_master(&progress.certificates));
        complete(&mut progress, &catalog, &config, target, 90);
    }
    assert!(certificate::has_master(&progress.certificates));
}
