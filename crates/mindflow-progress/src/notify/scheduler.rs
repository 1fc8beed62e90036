//! Notification scheduler: deferred, cancellable certificate announcements.
//!
//! Each announcement is one tokio task that sleeps for the announcement's
//! delay and then delivers `ProgressEvent::CertificateReady` to the event
//! sink. There is no queue and no retry. Dropping the scheduler cancels
//! everything still pending.

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::error::{ProgressError, Result};

use super::types::{Announcement, ProgressEvent};

/// Channel end the presentation layer listens on.
pub type EventSink = UnboundedSender<ProgressEvent>;

/// Handle to one pending announcement.
#[derive(Debug, Clone)]
pub struct AnnouncementHandle {
    abort: AbortHandle,
}

impl AnnouncementHandle {
    /// Cancel the announcement if it has not fired yet.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// Whether the announcement has fired or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

/// Schedules certificate announcements on a tokio runtime.
pub struct NotificationScheduler {
    runtime: Handle,
    sink: EventSink,
    pending: Vec<AbortHandle>,
}

impl NotificationScheduler {
    /// Create a scheduler that spawns onto `runtime` and delivers to `sink`.
    pub fn new(runtime: Handle, sink: EventSink) -> Self {
        Self {
            runtime,
            sink,
            pending: Vec::new(),
        }
    }

    /// Create a scheduler on the runtime the caller is running inside.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Runtime` when called outside a tokio runtime.
    pub fn current(sink: EventSink) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| ProgressError::Runtime(e.to_string()))?;
        Ok(Self::new(runtime, sink))
    }

    /// The sink announcements are delivered to.
    pub fn sink(&self) -> &EventSink {
        &self.sink
    }

    /// Deliver `event` immediately.
    pub fn emit(&self, event: ProgressEvent) {
        if self.sink.send(event).is_err() {
            log::debug!("event dropped: no listener");
        }
    }

    /// Schedule `announcement` for delivery after its delay.
    pub fn announce(&mut self, announcement: Announcement) -> AnnouncementHandle {
        self.pending.retain(|h| !h.is_finished());

        let sink = self.sink.clone();
        let Announcement { certificate, delay } = announcement;
        log::debug!(
            "announcing certificate {} in {}ms",
            certificate.id,
            delay.as_millis()
        );

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if sink
                .send(ProgressEvent::CertificateReady { certificate, delay })
                .is_err()
            {
                log::debug!("certificate announcement dropped: no listener");
            }
        });

        let abort = task.abort_handle();
        self.pending.push(abort.clone());
        AnnouncementHandle { abort }
    }

    /// Number of announcements that have not yet fired.
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }

    /// Cancel every pending announcement. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let mut cancelled = 0;
        for handle in self.pending.drain(..) {
            if !handle.is_finished() {
                handle.abort();
                cancelled += 1;
            }
        }
        if cancelled > 0 {
            log::debug!("cancelled {cancelled} pending announcement(s)");
        }
        cancelled
    }
}

impl Drop for NotificationScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
