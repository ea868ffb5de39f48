//! The notification surface for user-facing feedback.
//!
//! Rejected mutations are reported through a [`Notifier`] so the embedding
//! UI can render them as toasts. Callers that don't care plug in the
//! [`NullNotifier`]; tests use the [`RecordingNotifier`].

use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use tracing::{error, info, warn};

/// How prominently a notification should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One user-facing message: a title plus an optional longer description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    #[must_use]
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Severity::Info, title)
    }

    #[must_use]
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title)
    }

    #[must_use]
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Severity::Error, title)
    }

    fn new(severity: Severity, title: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)?;
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}

/// Fire-and-forget sink for notifications. Implementations must not fail;
/// the builder never inspects the outcome of a delivery.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}

/// Logs each notification at the level matching its severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => info!("{notification}"),
            Severity::Warning => warn!("{notification}"),
            Severity::Error => error!("{notification}"),
        }
    }
}

/// Keeps everything it receives for later inspection.
///
/// Clones share the same log, so a test can hand one clone to the builder
/// and read back through the other. Single-threaded on purpose, like the
/// flow it observes.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notifications: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything notified so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    /// Just the titles, for compact assertions.
    #[must_use]
    pub fn titles(&self) -> Vec<String> {
        self.notifications
            .borrow()
            .iter()
            .map(|notification| notification.title.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}
