//! Notification sink for user-facing success messages

/// Fire-and-forget sink for success notifications
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    /// Show a success message to the user
    fn success(&mut self, message: &str);
}
