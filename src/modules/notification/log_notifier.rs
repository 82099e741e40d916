use async_trait::async_trait;

use super::{NotificationError, NotificationMessage, Notifier};

/// Notifier that writes every message to the application log instead of a mailbox
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError> {
        tracing::info!(
            recipient = %message.recipient,
            title = %message.title,
            "Notification dispatched:\n{}",
            message.body
        );
        Ok(())
    }
}
