use serde::{Deserialize, Serialize};

/// Cron expression the scheduler uses for a once-a-day tick.
pub const DAILY_INTERVAL: &str = "0 0 * * *";

/// Cron expression the scheduler uses for a first-of-the-month tick.
pub const MONTHLY_INTERVAL: &str = "0 0 1 * *";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Monthly,
    Unknown,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Unknown => write!(f, "unknown"),
        }
    }
}

impl Frequency {
    /// Maps a frequency label, case-insensitively.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "daily" => Frequency::Daily,
            "monthly" => Frequency::Monthly,
            _ => Frequency::Unknown,
        }
    }

    /// Maps a cron-like interval. Only the two exact expressions are known.
    pub fn from_interval(interval: &str) -> Self {
        match interval {
            DAILY_INTERVAL => Frequency::Daily,
            MONTHLY_INTERVAL => Frequency::Monthly,
            _ => Frequency::Unknown,
        }
    }
}

/// Schedule part of a tick's settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSpec {
    pub frequency: Option<String>,
    pub interval: Option<String>,
}

impl ScheduleSpec {
    pub fn from_frequency(frequency: impl Into<String>) -> Self {
        Self {
            frequency: Some(frequency.into()),
            interval: None,
        }
    }

    pub fn from_interval(interval: impl Into<String>) -> Self {
        Self {
            frequency: None,
            interval: Some(interval.into()),
        }
    }
}

/// Resolves a schedule to exactly one frequency. Never fails.
///
/// A non-blank explicit frequency takes precedence and is not checked
/// against the interval.
pub fn resolve_frequency(schedule: &ScheduleSpec) -> Frequency {
    match schedule.frequency.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => Frequency::from_label(label),
        _ => schedule
            .interval
            .as_deref()
            .map(Frequency::from_interval)
            .unwrap_or(Frequency::Unknown),
    }
}
