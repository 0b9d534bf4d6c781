//! API Endpoints
//!
//! Every URL the admin tools talk to, built from a configurable base.

use chrono::NaiveDate;

use crate::model::EntityId;

/// Production API origin
pub const DEFAULT_API_BASE: &str = "https://api.bizzap.app";

/// Google Forms submission endpoint for the waitlist
pub const WAITLIST_FORM_URL: &str = "https://docs.google.com/forms/u/0/d/e/1FAIpQLSfGsdHitQ5v18ZnCcLMZ3WvTc_GAoZKXkJCFVHbI70ph2J0kQ/formResponse";

/// Form field that receives `countryCode + phoneNumber`
pub const WAITLIST_PHONE_FIELD: &str = "entry.1658933364";

/// Engagement aggregation window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementPeriod {
    Day,
    Week,
}

impl EngagementPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementPeriod::Day => "day",
            EngagementPeriod::Week => "week",
        }
    }
}

/// A concrete API resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    // Business analytics
    Companies,
    Company(EntityId),
    SignupsDaily { start: NaiveDate, end: NaiveDate },
    SignupsSummary,
    ActiveUserMetrics,
    ProfileCompletion(EntityId),

    // App usage analytics
    Screens,
    LiveUsers,
    Engagement { period: EngagementPeriod, user: Option<EntityId> },
    LiveDistribution,

    // Lead analytics
    LeadSummary,
    ConsumedLeadMetrics,
    LeadsByLocation,
    LeadsByMonth,
    MostViewedLeads,
    DeactivatedLeads,
    PublicLead(EntityId),
}

impl Endpoint {
    /// Short name used in logs and load reports
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Companies => "companies",
            Endpoint::Company(_) => "company",
            Endpoint::SignupsDaily { .. } => "signups_daily",
            Endpoint::SignupsSummary => "signups_summary",
            Endpoint::ActiveUserMetrics => "active_user_metrics",
            Endpoint::ProfileCompletion(_) => "profile_completion",
            Endpoint::Screens => "screens",
            Endpoint::LiveUsers => "live_users",
            Endpoint::Engagement { .. } => "engagement",
            Endpoint::LiveDistribution => "live_distribution",
            Endpoint::LeadSummary => "lead_summary",
            Endpoint::ConsumedLeadMetrics => "consumed_lead_metrics",
            Endpoint::LeadsByLocation => "leads_by_location",
            Endpoint::LeadsByMonth => "leads_by_month",
            Endpoint::MostViewedLeads => "most_viewed_leads",
            Endpoint::DeactivatedLeads => "deactivated_leads",
            Endpoint::PublicLead(_) => "public_lead",
        }
    }

    /// Path and query relative to the API base
    pub fn path(&self) -> String {
        match self {
            Endpoint::Companies => "/admin/companies".to_string(),
            Endpoint::Company(id) => format!("/admin/companies/{}", segment(id)),
            Endpoint::SignupsDaily { start, end } => format!(
                "/admin/companies/analytics/signups/daily?startDate={}&endDate={}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
            Endpoint::SignupsSummary => "/admin/companies/analytics/signups/summary".to_string(),
            Endpoint::ActiveUserMetrics => "/admin/companies/metrics/active-users".to_string(),
            Endpoint::ProfileCompletion(id) => {
                format!("/admin/companies/{}/profile-completion", segment(id))
            }
            Endpoint::Screens => "/analytics/dashboard/screens".to_string(),
            Endpoint::LiveUsers => "/analytics/dashboard/active-users".to_string(),
            Endpoint::Engagement { period, user } => {
                let mut path = format!(
                    "/analytics/dashboard/user-engagement?period={}",
                    period.as_str()
                );
                if let Some(user) = user {
                    path.push_str("&userId=");
                    path.push_str(&segment(user));
                }
                path
            }
            Endpoint::LiveDistribution => "/analytics/dashboard/live-distribution".to_string(),
            Endpoint::LeadSummary => "/admin/leads/analytics/summary".to_string(),
            Endpoint::ConsumedLeadMetrics => "/admin/leads/consumed-leads/metrics".to_string(),
            Endpoint::LeadsByLocation => "/admin/leads/analytics/by-location".to_string(),
            Endpoint::LeadsByMonth => "/admin/leads/analytics/count-by-month".to_string(),
            Endpoint::MostViewedLeads => "/admin/leads/analytics/most-viewed".to_string(),
            Endpoint::DeactivatedLeads => "/admin/leads/analytics/deactivated".to_string(),
            Endpoint::PublicLead(id) => format!("/leads/public/{}", segment(id)),
        }
    }
}

fn segment(id: &EntityId) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

/// Resolves endpoints against an API origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    base: String,
}

impl ApiBase {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base, endpoint.path())
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_default_base_urls() {
        let api = ApiBase::default();
        assert_eq!(api.url(&Endpoint::Companies), "https://api.bizzap.app/admin/companies");
        assert_eq!(
            api.url(&Endpoint::LiveUsers),
            "https://api.bizzap.app/analytics/dashboard/active-users"
        );
        assert_eq!(
            api.url(&Endpoint::ConsumedLeadMetrics),
            "https://api.bizzap.app/admin/leads/consumed-leads/metrics"
        );
    }

    #[test]
    fn test_daily_signups_query() {
        let endpoint = Endpoint::SignupsDaily {
            start: date("2026-01-01"),
            end: date("2026-01-08"),
        };
        assert_eq!(
            endpoint.path(),
            "/admin/companies/analytics/signups/daily?startDate=2026-01-01&endDate=2026-01-08"
        );
    }

    #[test]
    fn test_engagement_variants() {
        let week = Endpoint::Engagement { period: EngagementPeriod::Week, user: None };
        let day = Endpoint::Engagement {
            period: EngagementPeriod::Day,
            user: Some(EntityId::new("u 1")),
        };
        assert_eq!(week.path(), "/analytics/dashboard/user-engagement?period=week");
        assert_eq!(day.path(), "/analytics/dashboard/user-engagement?period=day&userId=u%201");
    }

    #[test]
    fn test_ids_are_encoded() {
        let endpoint = Endpoint::PublicLead(EntityId::new("a/b?c"));
        assert_eq!(endpoint.path(), "/leads/public/a%2Fb%3Fc");
        assert_eq!(
            Endpoint::ProfileCompletion(EntityId::new("42")).path(),
            "/admin/companies/42/profile-completion"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = ApiBase::new("http://localhost:3000/");
        assert_eq!(
            api.url(&Endpoint::Company(EntityId::new("9"))),
            "http://localhost:3000/admin/companies/9"
        );
    }
}
