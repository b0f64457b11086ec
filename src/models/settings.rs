use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{MonitorError, Result};
use crate::models::Credentials;
use crate::schedule::ScheduleSpec;

pub const ACCESS_KEY_ID_LABEL: &str = "aws_access_key_id";
pub const SECRET_ACCESS_KEY_LABEL: &str = "aws_secret_access_key";
pub const THRESHOLD_LABEL: &str = "threshold";
pub const FREQUENCY_LABEL: &str = "frequency";
pub const INTERVAL_LABEL: &str = "interval";

/// One entry of the settings list sent with every tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: String,
}

impl Setting {
    pub fn new(label: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: "text".to_string(),
            required: true,
            default: default.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickRequest {
    #[serde(alias = "returnUrl")]
    pub return_url: String,
    #[serde(default)]
    pub settings: Vec<Setting>,
}

/// Flat label -> value view over a tick's settings.
///
/// Later entries win over earlier ones with the same label. Missing labels
/// are not an error here; each accessor decides its own fallback.
#[derive(Clone, Default)]
pub struct MonitorSettings {
    values: HashMap<String, String>,
}

impl MonitorSettings {
    pub fn from_settings(settings: &[Setting]) -> Self {
        let values = settings
            .iter()
            .map(|s| (s.label.clone(), s.default.clone()))
            .collect();
        Self { values }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.values.get(label).map(String::as_str)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(
            self.get(ACCESS_KEY_ID_LABEL).unwrap_or_default(),
            self.get(SECRET_ACCESS_KEY_LABEL).unwrap_or_default(),
        )
    }

    /// Budget threshold as a whole, non-negative amount. An absent label
    /// means a zero budget.
    pub fn threshold(&self) -> Result<Decimal> {
        let Some(raw) = self.get(THRESHOLD_LABEL) else {
            return Ok(Decimal::ZERO);
        };

        raw.trim()
            .parse::<u64>()
            .map(Decimal::from)
            .map_err(|_| {
                MonitorError::config(format!(
                    "threshold must be a non-negative integer, got '{}'",
                    raw
                ))
            })
    }

    pub fn schedule(&self) -> ScheduleSpec {
        ScheduleSpec {
            frequency: self.get(FREQUENCY_LABEL).map(str::to_string),
            interval: self.get(INTERVAL_LABEL).map(str::to_string),
        }
    }
}

impl std::fmt::Debug for MonitorSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut labels: Vec<&str> = self.values.keys().map(String::as_str).collect();
        labels.sort_unstable();
        f.debug_struct("MonitorSettings")
            .field("labels", &labels)
            .finish()
    }
}
