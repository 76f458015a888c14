//! Console notifier (secondary/driven adapter)
//!
//! Surfaces notifications on the terminal without blocking: one line to
//! stdout plus a structured log record. This replaces the blocking
//! coordinate-confirmation dialog of the original click flow.

use photomap_core::ports::notification::{INotificationService, Notification};
use tracing::info;

/// Notifier printing to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Create a console notifier
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl INotificationService for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        info!(title = %notification.title, "notification");
        println!("{}", notification.title);
        for line in notification.body.lines() {
            println!("  {line}");
        }
    }
}
