//! Analytics aggregates
//!
//! Pre-computed statistics received from the business and app-usage
//! analytics endpoints. Every field defaults so a partial payload still
//! renders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::company::Company;
use super::lenient::{self, EntityId};

/// Signup count for one period with growth against the previous period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPeriod {
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub growth_percent: Option<f64>,
}

impl GrowthPeriod {
    /// Whether the growth badge renders as positive (missing counts as flat)
    pub fn is_growing(&self) -> bool {
        self.growth_percent.unwrap_or(0.0) >= 0.0
    }

    /// "+12%", "-3.5%", "0%"; missing growth renders as "%"
    pub fn growth_label(&self) -> String {
        match self.growth_percent {
            Some(p) if p > 0.0 => format!("+{}%", trim_number(p)),
            Some(p) => format!("{}%", trim_number(p)),
            None => "%".to_string(),
        }
    }
}

/// Drop a trailing ".0" so whole numbers print like integers
pub(crate) fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Signup summary across rolling periods
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupSummary {
    #[serde(default, deserialize_with = "lenient::optional_record")]
    pub today: Option<GrowthPeriod>,
    #[serde(default, deserialize_with = "lenient::optional_record")]
    pub this_week: Option<GrowthPeriod>,
    #[serde(default, deserialize_with = "lenient::optional_record")]
    pub this_month: Option<GrowthPeriod>,
    #[serde(default, deserialize_with = "lenient::optional_record")]
    pub this_year: Option<GrowthPeriod>,
    #[serde(default, deserialize_with = "lenient::optional_record")]
    pub all_time: Option<GrowthPeriod>,
}

impl SignupSummary {
    pub fn total_companies(&self) -> u64 {
        self.all_time.as_ref().map(|p| p.count).unwrap_or(0)
    }

    pub fn today_count(&self) -> u64 {
        self.today.as_ref().map(|p| p.count).unwrap_or(0)
    }

    /// Rows of the "Growth Rate" box in display order
    pub fn growth_rows(&self) -> Vec<(&'static str, GrowthPeriod)> {
        [
            ("Today", &self.today),
            ("This Week", &self.this_week),
            ("This Month", &self.this_month),
            ("This Year", &self.this_year),
        ]
        .into_iter()
        .map(|(label, period)| (label, period.clone().unwrap_or_default()))
        .collect()
    }
}

/// Daily and weekly active company users
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveUserMetrics {
    #[serde(default, deserialize_with = "lenient::count")]
    pub daily_active_users: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub weekly_active_users: u64,
}

/// Companies that signed up on one date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySignups {
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient::records")]
    pub companies: Vec<Company>,
}

impl DaySignups {
    pub fn day(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?;
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    /// "Monday, January 5, 2026"; falls back to the raw date string
    pub fn heading(&self) -> String {
        match self.day() {
            Some(day) => day.format("%A, %B %-d, %Y").to_string(),
            None => self.date.clone().unwrap_or_default(),
        }
    }
}

/// Daily signup breakdown for a date range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySignups {
    #[serde(default, deserialize_with = "lenient::records")]
    pub daily_breakdown: Vec<DaySignups>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_signups: u64,
}

impl DailySignups {
    pub fn has_data(&self) -> bool {
        !self.daily_breakdown.is_empty()
    }
}

/// Per-screen usage statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenStat {
    #[serde(default, deserialize_with = "lenient::text")]
    pub screen_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub visit_count: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_time_seconds: f64,
}

/// A session active in the last five minutes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveUser {
    #[serde(default)]
    pub user_id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub screen_name: Option<String>,
}

/// One bucket of the live distribution (screen or hour → active count)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveBucket {
    #[serde(
        default,
        alias = "screenName",
        alias = "hour",
        alias = "name",
        deserialize_with = "lenient::text"
    )]
    pub label: Option<String>,
    #[serde(default, alias = "users", alias = "activeUsers", deserialize_with = "lenient::count")]
    pub count: u64,
}

/// Engagement of one company user over a period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEngagement {
    #[serde(default)]
    pub user_id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_minutes: f64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub peak_time_range: Option<String>,
    /// Screen name → visit count
    #[serde(default, deserialize_with = "lenient::counts")]
    pub screen_visits: Vec<(String, u64)>,
}

impl UserEngagement {
    /// Most visited screen; ties resolve to the first entry
    pub fn top_screen(&self) -> Option<&str> {
        let mut best: Option<&(String, u64)> = None;
        for entry in &self.screen_visits {
            if best.map(|b| entry.1 > b.1).unwrap_or(true) {
                best = Some(entry);
            }
        }
        best.map(|(name, _)| name.as_str())
    }

    /// "42m", minutes rounded down when fractional
    pub fn minutes_label(&self) -> String {
        format!("{}m", trim_number(self.total_minutes.floor()))
    }
}

/// Width of a usage bar for a visit count, capped at 100%
pub fn usage_bar_percent(visits: u64) -> u64 {
    visits.saturating_mul(5).min(100)
}

/// Profile completion for one company
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompletion {
    #[serde(default, deserialize_with = "lenient::number")]
    pub completion_percentage: f64,
}

/// Circumference of the profile-health ring (r = 20)
pub const COMPLETION_RING: f64 = 125.6;

/// Stroke dash offset of the profile-health ring for a percentage
pub fn completion_ring_offset(percent: f64) -> f64 {
    let percent = percent.clamp(0.0, 100.0);
    COMPLETION_RING - (COMPLETION_RING * percent) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_growth_labels() {
        let up = GrowthPeriod { count: 4, growth_percent: Some(12.0) };
        let down = GrowthPeriod { count: 1, growth_percent: Some(-3.5) };
        let flat = GrowthPeriod { count: 0, growth_percent: Some(0.0) };

        assert_eq!(up.growth_label(), "+12%");
        assert!(up.is_growing());
        assert_eq!(down.growth_label(), "-3.5%");
        assert!(!down.is_growing());
        assert_eq!(flat.growth_label(), "0%");
        assert!(flat.is_growing());
    }

    #[test]
    fn test_summary_rows_default_missing_periods() {
        let summary: SignupSummary = serde_json::from_value(json!({
            "today": {"count": 3, "growthPercent": 50},
            "allTime": {"count": 120}
        }))
        .unwrap();

        assert_eq!(summary.total_companies(), 120);
        assert_eq!(summary.today_count(), 3);

        let rows = summary.growth_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].0, "Today");
        assert_eq!(rows[1].1, GrowthPeriod::default());
    }

    #[test]
    fn test_top_screen() {
        let engagement: UserEngagement = serde_json::from_value(json!({
            "companyName": "Acme",
            "totalMinutes": 42.7,
            "screenVisits": {"Home": 3, "Leads": 9, "Profile": 1}
        }))
        .unwrap();

        assert_eq!(engagement.top_screen(), Some("Leads"));
        assert_eq!(engagement.minutes_label(), "42m");
        assert_eq!(UserEngagement::default().top_screen(), None);
    }

    #[test]
    fn test_screen_visits_keep_payload_order() {
        let engagement: UserEngagement =
            serde_json::from_str(r#"{"screenVisits": {"Zeta": 5, "Alpha": 5, "Mid": 1}}"#).unwrap();

        assert_eq!(
            engagement.screen_visits,
            vec![("Zeta".to_string(), 5), ("Alpha".to_string(), 5), ("Mid".to_string(), 1)]
        );
        assert_eq!(engagement.top_screen(), Some("Zeta"));
    }

    #[test]
    fn test_day_heading() {
        let day = DaySignups {
            date: Some("2026-01-05T00:00:00.000Z".to_string()),
            ..Default::default()
        };
        assert_eq!(day.heading(), "Monday, January 5, 2026");
    }

    #[test]
    fn test_usage_and_ring_geometry() {
        assert_eq!(usage_bar_percent(3), 15);
        assert_eq!(usage_bar_percent(40), 100);
        assert!((completion_ring_offset(0.0) - COMPLETION_RING).abs() < 1e-9);
        assert!(completion_ring_offset(100.0).abs() < 1e-9);
        assert!((completion_ring_offset(50.0) - 62.8).abs() < 1e-9);
    }

    #[test]
    fn test_live_bucket_aliases() {
        let bucket: LiveBucket =
            serde_json::from_value(json!({"screenName": "Home", "users": 4})).unwrap();
        assert_eq!(bucket.label.as_deref(), Some("Home"));
        assert_eq!(bucket.count, 4);
    }
}
