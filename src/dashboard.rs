//! Admin Analytics Dashboard
//!
//! Collects the business and app-usage analytics into one
//! [`DashboardSnapshot`]. The seven date-independent endpoints are fetched
//! concurrently; daily signups depend on the date filter and are refreshed
//! on their own.
//!
//! A failing endpoint never fails the load. Its slice keeps the empty
//! default and the failure is recorded in the [`LoadReport`].

use futures_util::join;
use serde::Serialize;

use crate::date_range::DateRange;
use crate::endpoints::{EngagementPeriod, Endpoint};
use crate::envelope::Envelope;
use crate::error::{ClientError, ClientResult};
use crate::model::{
    ActiveUserMetrics, Company, DailySignups, EntityId, GrowthPeriod, LiveBucket, LiveUser,
    ScreenStat, SignupSummary, UserEngagement,
};
use crate::transport::{ApiClient, Transport};

/// Tabs of the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    Growth,
    Signups,
    Usage,
    Companies,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Growth,
        DashboardTab::Signups,
        DashboardTab::Usage,
        DashboardTab::Companies,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Growth => "Growth",
            DashboardTab::Signups => "Signups",
            DashboardTab::Usage => "App Usage",
            DashboardTab::Companies => "Companies",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DashboardTab::Growth => "growth",
            DashboardTab::Signups => "signups",
            DashboardTab::Usage => "usage",
            DashboardTab::Companies => "companies",
        }
    }

    /// Usage data is live, so the date filter is hidden there
    pub fn shows_date_filter(&self) -> bool {
        !matches!(self, DashboardTab::Usage)
    }
}

/// One endpoint that failed during a load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointFailure {
    pub endpoint: &'static str,
    pub message: String,
}

/// Failures swallowed while loading a view
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub failures: Vec<EndpointFailure>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn merge(&mut self, other: LoadReport) {
        self.failures.extend(other.failures);
    }

    /// Unwrap a fetch result, recording and logging the failure
    pub fn take(&mut self, endpoint: &Endpoint, result: ClientResult<Envelope>) -> Envelope {
        match result {
            Ok(envelope) => envelope,
            Err(e) => {
                self.record(endpoint, &e);
                Envelope::default()
            }
        }
    }

    pub fn record(&mut self, endpoint: &Endpoint, error: &ClientError) {
        tracing::warn!(endpoint = endpoint.name(), error = %error, "Endpoint failed, using empty data");
        self.failures.push(EndpointFailure {
            endpoint: endpoint.name(),
            message: error.to_string(),
        });
    }
}

/// Everything the admin dashboard renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub companies: Vec<Company>,
    pub summary: SignupSummary,
    pub metrics: ActiveUserMetrics,
    pub screens: Vec<ScreenStat>,
    pub live_users: Vec<LiveUser>,
    pub live_distribution: Vec<LiveBucket>,
    pub engagement: Vec<UserEngagement>,
    pub signups: DailySignups,
}

/// Top-row KPI card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: u64,
    pub sub: Option<String>,
}

/// Row of the weekly power-users table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerUserRow {
    pub company: String,
    pub total_time: String,
    pub peak_time: String,
    pub top_screen: String,
}

pub fn signups_endpoint(range: &DateRange) -> Endpoint {
    Endpoint::SignupsDaily {
        start: range.start,
        end: range.end,
    }
}

/// Daily signups for `range`; `None` when the request failed
pub async fn fetch_signups<T: Transport>(
    client: &ApiClient<T>,
    range: &DateRange,
) -> (Option<DailySignups>, LoadReport) {
    let mut report = LoadReport::default();
    let endpoint = signups_endpoint(range);
    match client.fetch(&endpoint).await {
        Ok(envelope) => (Some(envelope.object()), report),
        Err(e) => {
            report.record(&endpoint, &e);
            (None, report)
        }
    }
}

/// The companies list; `None` when the request failed
pub async fn fetch_companies<T: Transport>(client: &ApiClient<T>) -> (Option<Vec<Company>>, LoadReport) {
    let mut report = LoadReport::default();
    match client.fetch(&Endpoint::Companies).await {
        Ok(envelope) => (Some(envelope.list()), report),
        Err(e) => {
            report.record(&Endpoint::Companies, &e);
            (None, report)
        }
    }
}

/// Delete a company and fetch the list that remains
pub async fn delete_and_refetch<T: Transport>(
    client: &ApiClient<T>,
    id: &EntityId,
) -> ClientResult<(Option<Vec<Company>>, LoadReport)> {
    client.delete(&Endpoint::Company(id.clone())).await?;
    tracing::info!(company = %id, "Company deleted");
    Ok(fetch_companies(client).await)
}

impl DashboardSnapshot {
    /// Fetch every dashboard slice, then the signups for `range`
    pub async fn load_initial<T: Transport>(
        client: &ApiClient<T>,
        range: &DateRange,
    ) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        let engagement_endpoint = Endpoint::Engagement {
            period: EngagementPeriod::Week,
            user: None,
        };

        let (companies, summary, metrics, screens, live, distribution, engagement) = join!(
            client.fetch(&Endpoint::Companies),
            client.fetch(&Endpoint::SignupsSummary),
            client.fetch(&Endpoint::ActiveUserMetrics),
            client.fetch(&Endpoint::Screens),
            client.fetch(&Endpoint::LiveUsers),
            client.fetch(&Endpoint::LiveDistribution),
            client.fetch(&engagement_endpoint),
        );

        let mut snapshot = DashboardSnapshot {
            companies: report.take(&Endpoint::Companies, companies).list(),
            summary: report.take(&Endpoint::SignupsSummary, summary).object(),
            metrics: report.take(&Endpoint::ActiveUserMetrics, metrics).object(),
            screens: report.take(&Endpoint::Screens, screens).list(),
            live_users: report.take(&Endpoint::LiveUsers, live).list(),
            live_distribution: report.take(&Endpoint::LiveDistribution, distribution).list(),
            engagement: report.take(&engagement_endpoint, engagement).list(),
            signups: DailySignups::default(),
        };

        report.merge(snapshot.refresh_signups(client, range).await);

        tracing::info!(
            companies = snapshot.companies.len(),
            live = snapshot.live_users.len(),
            failures = report.failures.len(),
            "Dashboard loaded"
        );
        (snapshot, report)
    }

    /// Re-fetch only the date-dependent daily signups
    pub async fn refresh_signups<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        range: &DateRange,
    ) -> LoadReport {
        let (signups, report) = fetch_signups(client, range).await;
        // An errored refresh keeps the previously shown breakdown
        if let Some(signups) = signups {
            self.signups = signups;
        }
        report
    }

    /// Re-fetch the companies list
    pub async fn refresh_companies<T: Transport>(&mut self, client: &ApiClient<T>) -> LoadReport {
        let (companies, report) = fetch_companies(client).await;
        if let Some(companies) = companies {
            self.companies = companies;
        }
        report
    }

    /// Delete a company, then reload the list
    pub async fn delete_company<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        id: &EntityId,
    ) -> ClientResult<LoadReport> {
        let (companies, report) = delete_and_refetch(client, id).await?;
        if let Some(companies) = companies {
            self.companies = companies;
        }
        Ok(report)
    }

    /// Take a finished initial load into a snapshot that may already hold a
    /// newer signups refresh. `requested` is the range the load fetched,
    /// `current` the range the filter shows now.
    pub fn adopt_initial(&mut self, loaded: DashboardSnapshot, requested: &DateRange, current: &DateRange) {
        let signups = if requested == current {
            loaded.signups
        } else {
            std::mem::take(&mut self.signups)
        };
        *self = DashboardSnapshot { signups, ..loaded };
    }

    /// Store a signups refresh unless the filter has moved on since it was
    /// requested. Returns whether the breakdown was replaced.
    pub fn apply_signups(&mut self, requested: &DateRange, current: &DateRange, signups: DailySignups) -> bool {
        if requested != current {
            tracing::debug!("Dropping signups for a stale date range");
            return false;
        }
        self.signups = signups;
        true
    }

    pub fn kpis(&self) -> [Kpi; 4] {
        [
            Kpi {
                label: "Daily Active Users",
                value: self.metrics.daily_active_users,
                sub: None,
            },
            Kpi {
                label: "Weekly Active Users",
                value: self.metrics.weekly_active_users,
                sub: None,
            },
            Kpi {
                label: "Signups (Period)",
                value: self.signups.total_signups,
                sub: None,
            },
            Kpi {
                label: "Total Companies",
                value: self.summary.total_companies(),
                sub: Some(format!("+{} today", self.summary.today_count())),
            },
        ]
    }

    pub fn growth_rows(&self) -> Vec<(&'static str, GrowthPeriod)> {
        self.summary.growth_rows()
    }

    pub fn live_count(&self) -> usize {
        self.live_users.len()
    }

    pub fn power_users(&self) -> Vec<PowerUserRow> {
        self.engagement
            .iter()
            .map(|user| PowerUserRow {
                company: user.company_name.clone().unwrap_or_default(),
                total_time: user.minutes_label(),
                peak_time: user.peak_time_range.clone().unwrap_or_default(),
                top_screen: user.top_screen().unwrap_or("-").to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date_range::parse_date;
    use crate::transport::mock::MockTransport;
    use serde_json::{json, Value};

    fn range() -> DateRange {
        DateRange::new(parse_date("2026-02-01").unwrap(), parse_date("2026-02-08").unwrap())
    }

    fn full_mock() -> MockTransport {
        MockTransport::new()
            .with(Endpoint::Companies, json!({"data": [{"id": 1, "companyName": "Acme"}]}))
            .with(
                Endpoint::SignupsSummary,
                json!({"data": {"allTime": {"count": 120}, "today": {"count": 3, "growthPercent": 50}}}),
            )
            .with(Endpoint::ActiveUserMetrics, json!({"dailyActiveUsers": 14, "weeklyActiveUsers": 60}))
            .with(Endpoint::Screens, json!([{"screenName": "Home", "visitCount": 40, "avgTimeSeconds": 12.5}]))
            .with(Endpoint::LiveUsers, json!({"data": [{"companyName": "Acme", "screenName": "Leads"}]}))
            .with(Endpoint::LiveDistribution, json!({}))
            .with(
                Endpoint::Engagement { period: EngagementPeriod::Week, user: None },
                json!([{"companyName": "Acme", "totalMinutes": 90, "peakTimeRange": "10-11", "screenVisits": {"Home": 2, "Leads": 7}}]),
            )
            .with(
                signups_endpoint(&range()),
                json!({"data": {"dailyBreakdown": [{"date": "2026-02-02", "count": 2}], "totalSignups": 2}}),
            )
    }

    #[tokio::test]
    async fn test_load_initial_populates_every_slice() {
        let client = full_mock().client();
        let (snapshot, report) = DashboardSnapshot::load_initial(&client, &range()).await;

        assert!(report.is_clean());
        assert_eq!(snapshot.companies.len(), 1);
        assert_eq!(snapshot.live_count(), 1);
        assert!(snapshot.live_distribution.is_empty());
        assert_eq!(snapshot.signups.total_signups, 2);

        let kpis = snapshot.kpis();
        assert_eq!(kpis[0].value, 14);
        assert_eq!(kpis[2].value, 2);
        assert_eq!(kpis[3].value, 120);
        assert_eq!(kpis[3].sub.as_deref(), Some("+3 today"));

        let power = snapshot.power_users();
        assert_eq!(power[0].top_screen, "Leads");
        assert_eq!(power[0].total_time, "90m");
        assert_eq!(client.transport().gets.borrow().len(), 8);
    }

    #[tokio::test]
    async fn test_failures_are_recorded_and_defaulted() {
        let client = MockTransport::new()
            .with(Endpoint::Companies, json!([{"id": 1}]))
            .failing(Endpoint::Screens, ClientError::Timeout)
            .client();

        let (snapshot, report) = DashboardSnapshot::load_initial(&client, &range()).await;

        assert_eq!(snapshot.companies.len(), 1);
        assert!(snapshot.screens.is_empty());
        assert_eq!(snapshot.summary, SignupSummary::default());
        assert_eq!(snapshot.kpis()[3].sub.as_deref(), Some("+0 today"));
        // Every endpoint except companies failed
        assert_eq!(report.failures.len(), 7);
        assert!(report.failures.iter().any(|f| f.endpoint == "screens" && f.message == "Request timeout"));
    }

    #[tokio::test]
    async fn test_refresh_signups_only_hits_daily_endpoint() {
        let client = full_mock().client();
        let (mut snapshot, _) = DashboardSnapshot::load_initial(&client, &range()).await;
        let before = client.transport().gets.borrow().len();

        let report = snapshot.refresh_signups(&client, &range()).await;

        assert!(report.is_clean());
        let gets = client.transport().gets.borrow();
        assert_eq!(gets.len(), before + 1);
        assert!(gets[before].contains("/signups/daily?startDate=2026-02-01&endDate=2026-02-08"));
    }

    #[tokio::test]
    async fn test_delete_company_refetches_list() {
        let client = full_mock().client();
        let mut snapshot = DashboardSnapshot::default();

        let report = snapshot
            .delete_company(&client, &EntityId::new("1"))
            .await
            .unwrap();

        assert!(report.is_clean());
        assert_eq!(
            client.transport().deletes.borrow().as_slice(),
            ["https://api.bizzap.app/admin/companies/1"]
        );
        assert_eq!(snapshot.companies.len(), 1);
        assert_eq!(client.transport().hits("/admin/companies"), 1);
    }

    #[tokio::test]
    async fn test_empty_bodies_default_every_slice() {
        let engagement = Endpoint::Engagement { period: EngagementPeriod::Week, user: None };
        let mut mock = MockTransport::new();
        for endpoint in [
            Endpoint::Companies,
            Endpoint::SignupsSummary,
            Endpoint::ActiveUserMetrics,
            Endpoint::Screens,
            Endpoint::LiveUsers,
            Endpoint::LiveDistribution,
            engagement,
            signups_endpoint(&range()),
        ] {
            mock = mock.with(endpoint, json!({}));
        }

        let (snapshot, report) = DashboardSnapshot::load_initial(&mock.client(), &range()).await;

        assert!(report.is_clean());
        assert_eq!(snapshot, DashboardSnapshot::default());
        assert_eq!(snapshot.kpis().map(|k| k.value), [0, 0, 0, 0]);
        assert!(snapshot.power_users().is_empty());
        assert!(!snapshot.signups.has_data());
    }

    #[tokio::test]
    async fn test_null_bodies_default_every_slice() {
        let mock = MockTransport::new()
            .with(Endpoint::Companies, Value::Null)
            .with(Endpoint::SignupsSummary, json!({"data": null}))
            .with(Endpoint::Screens, json!({"data": {}}))
            .with(signups_endpoint(&range()), Value::Null);

        let (snapshot, _) = DashboardSnapshot::load_initial(&mock.client(), &range()).await;

        assert!(snapshot.companies.is_empty());
        assert!(snapshot.screens.is_empty());
        assert_eq!(snapshot.summary, SignupSummary::default());
        assert_eq!(snapshot.signups, DailySignups::default());
    }

    #[tokio::test]
    async fn test_fetch_signups_failure_keeps_nothing() {
        let client = MockTransport::new()
            .failing(signups_endpoint(&range()), ClientError::Timeout)
            .client();

        let (signups, report) = fetch_signups(&client, &range()).await;

        assert!(signups.is_none());
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn test_stale_signups_are_dropped() {
        let week = range();
        let month = DateRange::new(parse_date("2026-01-09").unwrap(), parse_date("2026-02-08").unwrap());
        let fresh = DailySignups { total_signups: 9, ..Default::default() };

        let mut snapshot = DashboardSnapshot::default();
        assert!(!snapshot.apply_signups(&week, &month, fresh.clone()));
        assert_eq!(snapshot.signups.total_signups, 0);

        assert!(snapshot.apply_signups(&month, &month, fresh));
        assert_eq!(snapshot.signups.total_signups, 9);
    }

    #[test]
    fn test_initial_load_keeps_newer_signups() {
        let week = range();
        let month = DateRange::new(parse_date("2026-01-09").unwrap(), parse_date("2026-02-08").unwrap());

        let mut current = DashboardSnapshot::default();
        current.apply_signups(&month, &month, DailySignups { total_signups: 30, ..Default::default() });

        let loaded = DashboardSnapshot {
            companies: vec![Company::default()],
            signups: DailySignups { total_signups: 7, ..Default::default() },
            ..Default::default()
        };
        current.adopt_initial(loaded.clone(), &week, &month);
        assert_eq!(current.companies.len(), 1);
        assert_eq!(current.signups.total_signups, 30);

        let mut untouched = DashboardSnapshot::default();
        untouched.adopt_initial(loaded, &week, &week);
        assert_eq!(untouched.signups.total_signups, 7);
    }

    #[test]
    fn test_power_user_without_visits() {
        let snapshot = DashboardSnapshot {
            engagement: vec![UserEngagement::default()],
            ..Default::default()
        };
        assert_eq!(snapshot.power_users()[0].top_screen, "-");
    }

    #[test]
    fn test_date_filter_visibility() {
        assert!(DashboardTab::Growth.shows_date_filter());
        assert!(DashboardTab::Companies.shows_date_filter());
        assert!(!DashboardTab::Usage.shows_date_filter());
    }
}
