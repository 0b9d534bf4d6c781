//! Analytics period filter

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quick-select presets of the date filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePreset {
    Today,
    Week,
    Month,
}

impl DatePreset {
    pub const ALL: [DatePreset; 3] = [DatePreset::Today, DatePreset::Week, DatePreset::Month];

    /// Days subtracted from today to get the start date
    pub fn days(&self) -> i64 {
        match self {
            DatePreset::Today => 0,
            DatePreset::Week => 7,
            DatePreset::Month => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::Today => "Today",
            DatePreset::Week => "Week",
            DatePreset::Month => "Month",
        }
    }
}

impl FromStr for DatePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "today" => Ok(DatePreset::Today),
            "week" => Ok(DatePreset::Week),
            "month" => Ok(DatePreset::Month),
            other => Err(format!("Unknown preset '{}' (expected today, week or month)", other)),
        }
    }
}

/// Inclusive calendar date range in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range ending `today` that starts `preset.days()` earlier
    pub fn preset_from(preset: DatePreset, today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(preset.days()),
            end: today,
        }
    }

    pub fn preset(preset: DatePreset) -> Self {
        Self::preset_from(preset, today())
    }

    /// Which preset, if any, the range currently matches for `today`
    pub fn active_preset(&self, today: NaiveDate) -> Option<DatePreset> {
        DatePreset::ALL
            .into_iter()
            .find(|p| *self == Self::preset_from(*p, today))
    }

    /// Replace the start date from a `YYYY-MM-DD` input; bad input is ignored
    pub fn set_start(&mut self, input: &str) -> bool {
        match parse_date(input) {
            Some(date) => {
                self.start = date;
                true
            }
            None => false,
        }
    }

    /// Replace the end date from a `YYYY-MM-DD` input; bad input is ignored
    pub fn set_end(&mut self, input: &str) -> bool {
        match parse_date(input) {
            Some(date) => {
                self.end = date;
                true
            }
            None => false,
        }
    }

    pub fn query(&self) -> String {
        format!(
            "startDate={}&endDate={}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

impl Default for DateRange {
    /// Last seven days ending today
    fn default() -> Self {
        Self::preset(DatePreset::Week)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start.format("%Y-%m-%d"), self.end.format("%Y-%m-%d"))
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_presets() {
        let today = day("2026-03-10");
        assert_eq!(
            DateRange::preset_from(DatePreset::Today, today),
            DateRange::new(today, today)
        );
        assert_eq!(DateRange::preset_from(DatePreset::Week, today).start, day("2026-03-03"));
        assert_eq!(DateRange::preset_from(DatePreset::Month, today).start, day("2026-02-08"));
    }

    #[test]
    fn test_active_preset() {
        let today = day("2026-03-10");
        let mut range = DateRange::preset_from(DatePreset::Month, today);
        assert_eq!(range.active_preset(today), Some(DatePreset::Month));

        assert!(range.set_start("2026-03-01"));
        assert_eq!(range.active_preset(today), None);
    }

    #[test]
    fn test_invalid_input_ignored() {
        let mut range = DateRange::new(day("2026-01-01"), day("2026-01-07"));
        assert!(!range.set_end("07/01/2026"));
        assert!(!range.set_start(""));
        assert_eq!(range.query(), "startDate=2026-01-01&endDate=2026-01-07");
    }

    #[test]
    fn test_default_is_last_week() {
        let range = DateRange::default();
        assert_eq!(range.end, today());
        assert_eq!(range.end - range.start, Duration::days(7));
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!("Month".parse::<DatePreset>(), Ok(DatePreset::Month));
        assert!("year".parse::<DatePreset>().is_err());
    }
}
