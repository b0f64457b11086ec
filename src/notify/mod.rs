//! Outbound notification port and the webhook implementation.

pub mod webhook;

pub use webhook::WebhookDispatcher;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::NotificationPayload;

#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Delivers `payload` to `destination`. Called at most once per tick.
    async fn dispatch(&self, destination: &str, payload: &NotificationPayload) -> Result<()>;
}
