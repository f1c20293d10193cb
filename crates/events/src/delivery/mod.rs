//! External delivery channels for cutoff notifications.

pub mod webhook;

use async_trait::async_trait;

use webhook::WebhookError;

/// Publishes a rendered summary somewhere outside the process.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, content: &str) -> Result<(), WebhookError>;
}
