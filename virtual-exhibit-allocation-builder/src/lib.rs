//! Stateful orchestration of the exhibit-creation flow.
//!
//! [`ExhibitBuilder`] owns everything the flow mutates and funnels every
//! change through handlers that either commit atomically or reject with a
//! [`ChangeRejected`]. Rejections that the UI surfaces as toasts go through
//! the [`Notifier`] seam; wire [`TracingNotifier`] for log output or
//! [`RecordingNotifier`] to assert on toasts in tests.
//!
//! [`ExhibitRecord`] is the serde face of a stored exhibit, loadable back
//! into a builder in an editable or spectator mode.

pub mod error;
pub mod notify;
pub mod record;
pub mod state;

pub use error::ChangeRejected;
pub use notify::{
    Notification, Notifier, NullNotifier, RecordingNotifier, Severity, TracingNotifier,
};
pub use record::{ExhibitRecord, ExhibitStatus, LoadMode};
pub use state::ExhibitBuilder;
