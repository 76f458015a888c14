//! Notification port (driven/secondary port)
//!
//! This module defines the interface for surfacing short messages to the
//! user. The map workflow uses it to confirm clicked coordinates; the
//! contract is only "surface the message", never a blocking prompt.
//!
//! ## Design Notes
//!
//! - Notifications are fire-and-forget; the caller does not wait for
//!   delivery or user interaction, so the method is synchronous and
//!   callable from the map click handler. Implementations must not block.

/// A notification to display to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Title of the notification (short, descriptive)
    pub title: String,
    /// Body text with details about the event
    pub body: String,
}

impl Notification {
    /// Creates a new notification with the given title and body
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Port trait for user-facing notifications
pub trait INotificationService: Send + Sync {
    /// Surfaces a notification to the user without blocking
    fn notify(&self, notification: Notification);
}
