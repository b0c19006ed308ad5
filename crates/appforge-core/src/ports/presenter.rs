//! Presentation port for eligible notifications.

use std::io;

use crate::domain::Notification;

/// Renders a notification to the user.
///
/// The notification service records the display timestamp after each
/// successful `render`, so a failed render leaves the notification eligible.
pub trait NotificationPresenter: Send + Sync {
    fn render(&self, notification: &Notification) -> io::Result<()>;
}
