use serde::{Deserialize, Serialize};

/// Sender name shown by the receiving channel.
pub const SOURCE_LABEL: &str = "AWS Spend Monitor";

/// Event name attached to every notification.
pub const EVENT_NAME: &str = "Cost Alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Success,
    Error,
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationStatus::Success => write!(f, "success"),
            NotificationStatus::Error => write!(f, "error"),
        }
    }
}

/// Webhook body delivered to the tick's `return_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPayload {
    message: String,
    #[serde(rename = "username")]
    source_label: String,
    event_name: String,
    status: NotificationStatus,
}

impl NotificationPayload {
    pub fn new(message: impl Into<String>, status: NotificationStatus) -> Self {
        Self {
            message: message.into(),
            source_label: SOURCE_LABEL.to_string(),
            event_name: EVENT_NAME.to_string(),
            status,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn status(&self) -> NotificationStatus {
        self.status
    }
}
