use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::{MonitorError, Result};
use crate::schedule::Frequency;

/// Half-open `[start, end)` reporting window. `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start >= end {
            return Err(MonitorError::invalid_input(
                "date_range",
                format!("start {} must be before end {}", start, end),
            ));
        }
        Ok(Self { start, end })
    }

    /// Window to report on for `frequency`, anchored on `today`.
    ///
    /// Daily covers yesterday; monthly covers the whole previous month plus
    /// the current month to date.
    pub fn for_frequency(frequency: Frequency, today: NaiveDate) -> Result<Self> {
        let start = match frequency {
            Frequency::Daily => today.checked_sub_days(Days::new(1)),
            Frequency::Monthly => today
                .with_day(1)
                .and_then(|first| first.checked_sub_days(Days::new(1)))
                .and_then(|last_of_previous| last_of_previous.with_day(1)),
            Frequency::Unknown => {
                return Err(MonitorError::unsupported_frequency(frequency.to_string()))
            }
        }
        .ok_or_else(|| MonitorError::internal(format!("date underflow before {}", today)))?;

        Self::new(start, today)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `YYYY-MM-DD`, the format the provider expects.
    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start_iso(), self.end_iso())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_daily_range() {
        let range = DateRange::for_frequency(Frequency::Daily, date(2025, 3, 15)).unwrap();
        assert_eq!(range.start(), date(2025, 3, 14));
        assert_eq!(range.end(), date(2025, 3, 15));
        assert_eq!(range.num_days(), 1);
    }

    #[test]
    fn test_daily_range_crosses_month_and_year() {
        let range = DateRange::for_frequency(Frequency::Daily, date(2025, 1, 1)).unwrap();
        assert_eq!(range.start(), date(2024, 12, 31));

        let range = DateRange::for_frequency(Frequency::Daily, date(2024, 3, 1)).unwrap();
        assert_eq!(range.start(), date(2024, 2, 29));
    }

    #[test]
    fn test_monthly_range() {
        let range = DateRange::for_frequency(Frequency::Monthly, date(2025, 3, 15)).unwrap();
        assert_eq!(range.start(), date(2025, 2, 1));
        assert_eq!(range.end(), date(2025, 3, 15));
    }

    #[test]
    fn test_monthly_range_year_rollover() {
        let range = DateRange::for_frequency(Frequency::Monthly, date(2025, 1, 10)).unwrap();
        assert_eq!(range.start(), date(2024, 12, 1));
        assert_eq!(range.end(), date(2025, 1, 10));
    }

    #[test]
    fn test_monthly_range_on_first_of_month() {
        let range = DateRange::for_frequency(Frequency::Monthly, date(2025, 3, 1)).unwrap();
        assert_eq!(range.start(), date(2025, 2, 1));
        assert_eq!(range.end(), date(2025, 3, 1));
    }

    #[test]
    fn test_unknown_frequency_fails() {
        let err = DateRange::for_frequency(Frequency::Unknown, date(2025, 3, 15)).unwrap_err();
        assert!(matches!(err, MonitorError::UnsupportedFrequency(_)));
    }

    #[test]
    fn test_iso_formatting() {
        let range = DateRange::for_frequency(Frequency::Monthly, date(2025, 1, 10)).unwrap();
        assert_eq!(range.start_iso(), "2024-12-01");
        assert_eq!(range.end_iso(), "2025-01-10");
        assert_eq!(range.to_string(), "2024-12-01..2025-01-10");
    }

    #[test]
    fn test_empty_window_rejected() {
        assert!(DateRange::new(date(2025, 3, 15), date(2025, 3, 15)).is_err());
        assert!(DateRange::new(date(2025, 3, 16), date(2025, 3, 15)).is_err());
    }
}
