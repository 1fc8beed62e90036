//! Integration test: sessions backed by the JSON file store.
//!
//! Verifies that every mutation is persisted before it returns, that a new
//! session resumes from disk, and that corrupt state falls back to defaults.

use std::time::Duration;

use mindflow_progress::storage::ProgressStore;
use mindflow_progress::{
    EngineConfig, FileProgressStore, LearnerSession, ModuleCatalog, ModuleCode,
    NotificationScheduler, ProgressEvent, UserProgress,
};

fn config() -> EngineConfig {
    EngineConfig {
        standard_announce_delay_ms: 5,
        master_announce_delay_ms: 10,
        ..EngineConfig::default()
    }
}

fn open(dir: &std::path::Path) -> LearnerSession<FileProgressStore> {
    let config = config();
    let store = FileProgressStore::new(dir, &config.storage_key).unwrap();
    let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
    let scheduler = NotificationScheduler::current(tx).unwrap();
    LearnerSession::open(store, ModuleCatalog::builtin(), config, scheduler)
}

#[tokio::test]
async fn session_resumes_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let token = {
        let mut session = open(dir.path());
        session.enroll(&ModuleCode::new("ATMT_1")).unwrap();
        let outcome = session.complete(&ModuleCode::new("ATMT_1"), 88).unwrap();
        outcome.issued[0].verification_token.to_string()
    };

    let session = open(dir.path());
    assert!(session.progress().is_completed(&ModuleCode::new("ATMT_1")));
    assert_eq!(session.progress().score(&ModuleCode::new("ATMT_1")), Some(88));
    assert!(session.resolve(&token).is_some());
}

#[tokio::test]
async fn every_mutation_is_on_disk_before_returning() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path());

    session.complete(&ModuleCode::new("ATMT_0.1"), 100).unwrap();
    assert_eq!(session.store().load(), *session.progress());

    session.enroll(&ModuleCode::new("ATMT_2")).unwrap();
    assert_eq!(session.store().load(), *session.progress());
}

#[tokio::test]
async fn corrupt_state_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("nlp_lms_progress.json"), b"{ definitely not json").unwrap();

    let mut session = open(dir.path());
    assert_eq!(*session.progress(), UserProgress::default());

    // The next mutation replaces the corrupt blob
    session.enroll(&ModuleCode::new("ATMT_1")).unwrap();
    assert!(session.store().try_load().unwrap().is_some());
}

#[tokio::test]
async fn announcement_reaches_listener_after_persist() {
    let dir = tempfile::tempdir().unwrap();
    let config = config();
    let store = FileProgressStore::new(dir.path(), &config.storage_key).unwrap();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let scheduler = NotificationScheduler::current(tx).unwrap();
    let mut session = LearnerSession::open(store, ModuleCatalog::builtin(), config, scheduler);

    let outcome = session.complete(&ModuleCode::new("ATMT_4"), 90).unwrap();

    let announced = loop {
        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out")
            .expect("closed");
        if let ProgressEvent::CertificateReady { certificate, .. } = event {
            break certificate;
        }
    };
    assert_eq!(announced, outcome.issued[0]);

    let on_disk = session.store().load();
    assert!(on_disk
        .certificates
        .iter()
        .any(|c| c.verification_token == announced.verification_token));
}
