//! Learner progress: the single mutable aggregate and its operations.
//!
//! The progress module provides:
//! - The `UserProgress` aggregate and its persisted shape
//! - Idempotent enrollment
//! - Completion recording with unlocks and certificate issuance
//! - Profile edits and summary figures

pub mod completion;
pub mod enroll;
pub mod profile;
pub mod summary;
pub mod types;

pub use types::UserProgress;

pub use completion::{complete, CompletionOutcome};
pub use enroll::enroll;
pub use profile::{update_profile, ProfileUpdate};
pub use summary::ProgressSummary;
