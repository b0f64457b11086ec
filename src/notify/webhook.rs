use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::error::{MonitorError, Result};
use crate::models::NotificationPayload;
use crate::notify::NotificationDispatcher;

/// Posts notifications as JSON to the caller-supplied return URL.
pub struct WebhookDispatcher {
    http: reqwest::Client,
}

impl WebhookDispatcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl NotificationDispatcher for WebhookDispatcher {
    async fn dispatch(&self, destination: &str, payload: &NotificationPayload) -> Result<()> {
        let url = Url::parse(destination)
            .map_err(|e| MonitorError::invalid_input("return_url", e.to_string()))?;

        debug!(status = %payload.status(), "posting notification");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| MonitorError::dispatch(format!("webhook request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::dispatch(format!(
                "webhook responded with {}",
                status
            )));
        }

        info!(status = %payload.status(), "notification delivered");
        Ok(())
    }
}
