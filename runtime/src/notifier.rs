//! Stock [`Notifier`] implementations.
//!
//! - [`TracingNotifier`] logs every notification as a `tracing` event.
//! - [`ChannelNotifier`] forwards notifications to an async consumer, such as
//!   a UI task that renders toasts.
//! - [`NoopNotifier`] drops everything.

use tasklist_core::environment::{Notification, NotificationKind, Notifier};
use tokio::sync::mpsc;

/// Logs notifications under the `notifications` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!(
                target: "notifications",
                title = %notification.title,
                "success"
            ),
            NotificationKind::Error => tracing::warn!(
                target: "notifications",
                title = %notification.title,
                "error"
            ),
        }
    }
}

/// Discards all notifications
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notification: &Notification) {}
}

/// Forwards notifications over an unbounded `tokio` channel
///
/// Sending never blocks. Once the receiver is dropped, notifications are
/// discarded.
///
/// # Example
///
/// ```
/// use tasklist_core::environment::{Notification, Notifier};
/// use tasklist_runtime::ChannelNotifier;
///
/// let (notifier, mut rx) = ChannelNotifier::new();
/// notifier.notify(&Notification::success("Task added"));
/// assert_eq!(rx.try_recv().ok(), Some(Notification::success("Task added")));
/// ```
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Creates a notifier and the receiving end of its channel
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Returns true once the receiver has been dropped
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: &Notification) {
        if self.sender.send(notification.clone()).is_err() {
            tracing::debug!(title = %notification.title, "Notification receiver dropped");
        }
    }
}
