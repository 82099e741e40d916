//! Notification interface
//!
//! Outbound messages to organisation mailboxes. Delivery is a single
//! request/response call; implementations do not retry.

mod log_notifier;

pub use log_notifier::LogNotifier;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub recipient: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum NotificationError {
    #[allow(dead_code)]
    #[error("Failed to deliver notification to {recipient}: {reason}")]
    Delivery { recipient: String, reason: String },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<(), NotificationError>;
}
