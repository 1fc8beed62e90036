//! Announcements and UI-facing events.

use std::time::Duration;

use crate::catalog::ModuleCode;
use crate::certificate::Certificate;
use crate::config::EngineConfig;
use crate::progress::UserProgress;

/// Which kind of certificate an announcement presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementKind {
    Standard,
    Master,
}

/// A certificate to surface to the learner after `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub certificate: Certificate,
    pub delay: Duration,
}

impl Announcement {
    /// Pick the announcement for one completion event.
    ///
    /// A newly issued master certificate supersedes the standard one: only
    /// the master is announced, with the longer delay. The standard
    /// certificate stays recorded either way.
    pub fn for_completion(
        standard: Certificate,
        master: Option<Certificate>,
        config: &EngineConfig,
    ) -> Self {
        match master {
            Some(certificate) => Self {
                certificate,
                delay: config.master_delay(),
            },
            None => Self {
                certificate: standard,
                delay: config.standard_delay(),
            },
        }
    }

    pub fn kind(&self) -> AnnouncementKind {
        if self.certificate.is_master() {
            AnnouncementKind::Master
        } else {
            AnnouncementKind::Standard
        }
    }
}

/// Events emitted to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    ModuleEnrolled {
        code: ModuleCode,
    },
    ModuleCompleted {
        code: ModuleCode,
        score: u32,
        /// Snapshot after the completion was persisted.
        progress: Box<UserProgress>,
    },
    CertificateReady {
        certificate: Certificate,
        delay: Duration,
    },
    ProfileUpdated {
        student_name: String,
        profile_image: String,
    },
}
