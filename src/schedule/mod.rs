//! Reporting-window resolution: schedule settings -> frequency -> date range.

pub mod date_range;
pub mod frequency;

pub use date_range::DateRange;
pub use frequency::{resolve_frequency, Frequency, ScheduleSpec, DAILY_INTERVAL, MONTHLY_INTERVAL};
