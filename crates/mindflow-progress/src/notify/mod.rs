//! Notifications: telling the presentation layer what happened.
//!
//! The notify module provides:
//! - UI-facing `ProgressEvent`s
//! - The master-over-standard announcement priority rule
//! - A cancellable, delayed announcement scheduler

pub mod scheduler;
pub mod types;

pub use scheduler::{AnnouncementHandle, EventSink, NotificationScheduler};
pub use types::{Announcement, AnnouncementKind, ProgressEvent};
