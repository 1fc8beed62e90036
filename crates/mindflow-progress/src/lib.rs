//! MindFlow progress: the progress and credentialing engine.
//!
//! Tracks a learner through a catalog of prerequisite-gated modules:
//! enrollment, completion recording, unlock fan-out, certificate issuance
//! (including the aggregate master credential), token verification, and
//! deferred, cancellable certificate announcements.

pub mod catalog;
pub mod certificate;
pub mod config;
pub mod crypto;
pub mod error;
pub mod notify;
pub mod progress;
pub mod session;
pub mod storage;
pub mod time;

// Re-export primary types
pub use error::{ProgressError, Result};
pub use config::EngineConfig;
pub use session::LearnerSession;

// Re-export catalog types
pub use catalog::{
    Bundle, Module, ModuleCatalog, ModuleCode, ModuleLevel, ModuleStatus, PaymentPlan,
    QuizQuestion, Quote,
};

// Re-export progress types
pub use progress::{CompletionOutcome, ProfileUpdate, ProgressSummary, UserProgress};

// Re-export certificate types
pub use certificate::{Certificate, CertificateId, CertificateVerification, VerificationToken};

// Re-export notification types
pub use notify::{
    Announcement, AnnouncementHandle, AnnouncementKind, EventSink, NotificationScheduler,
    ProgressEvent,
};

// Re-export storage types
pub use storage::{FileProgressStore, MemoryProgressStore, ProgressStore};
