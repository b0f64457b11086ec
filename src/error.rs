//! Error handling for the spend monitor service.
//!
//! `MonitorError` is the single error type of the library. Provider failures
//! never surface through it at the tick boundary: they are folded into
//! [`CostQueryResult::Failure`](crate::models::CostQueryResult) first.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    /// Settings or environment that cannot be interpreted
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input validation errors
    #[error("invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Schedule that resolves to neither daily nor monthly
    #[error("unsupported frequency: {0}")]
    UnsupportedFrequency(String),

    /// Cost provider errors (credentials, upstream API, malformed response)
    #[error("provider error: {0}")]
    Provider(String),

    /// Outbound notification delivery errors
    #[error("dispatch error: {0}")]
    Dispatch(String),

    /// Network errors (connection failures, etc.)
    #[error("network error: {0}")]
    Network(String),

    /// Timeout errors (operation deadlines exceeded)
    #[error("timeout: {0}")]
    Timeout(String),

    /// Serialization/deserialization errors
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal errors (bugs, unexpected states, etc.)
    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;

impl From<serde_json::Error> for MonitorError {
    fn from(err: serde_json::Error) -> Self {
        MonitorError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for MonitorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MonitorError::Timeout(err.to_string())
        } else if err.is_connect() {
            MonitorError::Network(format!("connection error: {err}"))
        } else {
            MonitorError::Network(err.to_string())
        }
    }
}

impl axum::response::IntoResponse for MonitorError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;

        let (status, error_type) = match &self {
            MonitorError::Config(_) => (StatusCode::BAD_REQUEST, "config_error"),
            MonitorError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "invalid_input"),
            MonitorError::Serialization(_) => (StatusCode::BAD_REQUEST, "serialization_error"),
            MonitorError::UnsupportedFrequency(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unsupported_frequency")
            }
            MonitorError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            MonitorError::Network(_) | MonitorError::Provider(_) | MonitorError::Dispatch(_) => {
                (StatusCode::BAD_GATEWAY, "upstream_error")
            }
            MonitorError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = Json(serde_json::json!({
            "error": error_type,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl MonitorError {
    /// Determines if this error is a client error (4xx-equivalent).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MonitorError::Config(_)
                | MonitorError::InvalidInput { .. }
                | MonitorError::Serialization(_)
                | MonitorError::UnsupportedFrequency(_)
        )
    }

    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        MonitorError::Config(msg.into())
    }

    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MonitorError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn unsupported_frequency(frequency: impl Into<String>) -> Self {
        MonitorError::UnsupportedFrequency(frequency.into())
    }

    #[must_use]
    pub fn provider(msg: impl Into<String>) -> Self {
        MonitorError::Provider(msg.into())
    }

    #[must_use]
    pub fn dispatch(msg: impl Into<String>) -> Self {
        MonitorError::Dispatch(msg.into())
    }

    #[must_use]
    pub fn timeout(msg: impl Into<String>) -> Self {
        MonitorError::Timeout(msg.into())
    }

    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        MonitorError::Internal(msg.into())
    }
}
