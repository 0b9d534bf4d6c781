//! Companies Tab
//!
//! Search over the loaded companies and the expandable detail rows. Detail
//! for a company (profile completion and today's usage) is fetched the first
//! time its row is expanded and kept for the rest of the session.

use std::collections::HashMap;

use futures_util::join;
use serde::Serialize;

use crate::dashboard::LoadReport;
use crate::endpoints::{EngagementPeriod, Endpoint};
use crate::model::{completion_ring_offset, Company, EntityId, ProfileCompletion, UserEngagement};
use crate::transport::{ApiClient, Transport};

/// Companies whose name (case-insensitive) or phone contains `term`
pub fn search<'a>(companies: &'a [Company], term: &str) -> Vec<&'a Company> {
    let term = term.to_lowercase();
    companies
        .iter()
        .filter(|c| matches_search(c, &term))
        .collect()
}

fn matches_search(company: &Company, term: &str) -> bool {
    let by_name = company
        .company_name
        .as_deref()
        .map(|name| name.to_lowercase().contains(term))
        .unwrap_or(false);
    let by_phone = company
        .phone_number
        .as_deref()
        .map(|phone| phone.contains(term))
        .unwrap_or(false);
    by_name || by_phone
}

/// Lazily fetched detail of one company
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyDetail {
    /// `None` when the completion request failed
    pub completion: Option<f64>,
    pub usage: UserEngagement,
}

impl CompanyDetail {
    pub fn completion_percent(&self) -> f64 {
        self.completion.unwrap_or(0.0)
    }

    pub fn ring_offset(&self) -> f64 {
        completion_ring_offset(self.completion_percent())
    }
}

/// Fetch profile completion and today's usage for `id` in parallel
pub async fn fetch_company_detail<T: Transport>(
    client: &ApiClient<T>,
    id: &EntityId,
) -> (CompanyDetail, LoadReport) {
    let mut report = LoadReport::default();
    let completion_endpoint = Endpoint::ProfileCompletion(id.clone());
    let usage_endpoint = Endpoint::Engagement {
        period: EngagementPeriod::Day,
        user: Some(id.clone()),
    };

    let (completion, usage) = join!(client.fetch(&completion_endpoint), client.fetch(&usage_endpoint));

    let completion = match completion {
        Ok(envelope) => Some(envelope.object::<ProfileCompletion>().completion_percentage),
        Err(e) => {
            report.record(&completion_endpoint, &e);
            None
        }
    };
    let usage = report
        .take(&usage_endpoint, usage)
        .first::<UserEngagement>()
        .unwrap_or_default();

    (CompanyDetail { completion, usage }, report)
}

/// Detail cache entry
#[derive(Debug, Clone, PartialEq)]
pub enum DetailSlot {
    Pending,
    Ready(CompanyDetail),
}

/// What a row toggle asks the caller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    Collapsed,
    /// Row expanded; `fetch` is set the first time the id is seen
    Expanded { fetch: bool },
}

/// Expand/collapse state of the companies table
#[derive(Debug, Clone, Default)]
pub struct CompaniesPanel {
    expanded: Option<EntityId>,
    details: HashMap<EntityId, DetailSlot>,
    pub search_term: String,
}

impl CompaniesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &EntityId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Toggle a row; only one row is expanded at a time
    pub fn toggle(&mut self, id: &EntityId) -> Toggle {
        if self.is_expanded(id) {
            self.expanded = None;
            return Toggle::Collapsed;
        }

        self.expanded = Some(id.clone());
        let fetch = !self.details.contains_key(id);
        if fetch {
            self.details.insert(id.clone(), DetailSlot::Pending);
        }
        Toggle::Expanded { fetch }
    }

    /// Store a finished fetch for `id`
    pub fn complete(&mut self, id: &EntityId, detail: CompanyDetail) {
        self.details.insert(id.clone(), DetailSlot::Ready(detail));
    }

    pub fn slot(&self, id: &EntityId) -> Option<&DetailSlot> {
        self.details.get(id)
    }

    pub fn detail(&self, id: &EntityId) -> Option<&CompanyDetail> {
        match self.details.get(id)? {
            DetailSlot::Ready(detail) => Some(detail),
            DetailSlot::Pending => None,
        }
    }

    /// Toggle and, when needed, fetch detail through `client`
    pub async fn toggle_and_load<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        id: &EntityId,
    ) -> (Toggle, LoadReport) {
        let outcome = self.toggle(id);
        let mut report = LoadReport::default();
        if outcome == (Toggle::Expanded { fetch: true }) {
            let (detail, fetch_report) = fetch_company_detail(client, id).await;
            self.complete(id, detail);
            report = fetch_report;
        }
        (outcome, report)
    }

    pub fn filtered<'a>(&self, companies: &'a [Company]) -> Vec<&'a Company> {
        search(companies, &self.search_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::transport::mock::MockTransport;
    use serde_json::json;

    fn company(name: Option<&str>, phone: Option<&str>) -> Company {
        Company {
            company_name: name.map(str::to_string),
            phone_number: phone.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_name_and_phone() {
        let companies = vec![
            company(Some("Acme Textiles"), Some("+919800011122")),
            company(Some("Forge Co"), None),
            company(None, Some("+14155550100")),
            company(None, None),
        ];

        assert_eq!(search(&companies, "ACME").len(), 1);
        assert_eq!(search(&companies, "98000").len(), 1);
        assert_eq!(search(&companies, "+1415").len(), 1);
        // Empty term lists everything that has a name or phone
        assert_eq!(search(&companies, "").len(), 3);
    }

    #[test]
    fn test_toggle_memoizes_per_id() {
        let mut panel = CompaniesPanel::new();
        let a = EntityId::new("a");
        let b = EntityId::new("b");

        assert_eq!(panel.toggle(&a), Toggle::Expanded { fetch: true });
        assert_eq!(panel.toggle(&a), Toggle::Collapsed);
        // Still pending: no second fetch
        assert_eq!(panel.toggle(&a), Toggle::Expanded { fetch: false });
        assert_eq!(panel.toggle(&b), Toggle::Expanded { fetch: true });
        assert!(panel.is_expanded(&b));
        assert!(!panel.is_expanded(&a));
        assert_eq!(panel.slot(&a), Some(&DetailSlot::Pending));
    }

    #[tokio::test]
    async fn test_detail_fetched_once_per_session() {
        let id = EntityId::new("42");
        let client = MockTransport::new()
            .with(
                Endpoint::ProfileCompletion(id.clone()),
                json!({"data": {"completionPercentage": 75}}),
            )
            .with(
                Endpoint::Engagement { period: EngagementPeriod::Day, user: Some(id.clone()) },
                json!({"data": [{"totalMinutes": 12, "screenVisits": {"Home": 3}}]}),
            )
            .client();

        let mut panel = CompaniesPanel::new();
        for _ in 0..3 {
            panel.toggle_and_load(&client, &id).await;
            panel.toggle_and_load(&client, &id).await;
        }

        assert_eq!(client.transport().hits("profile-completion"), 1);
        assert_eq!(client.transport().hits("period=day"), 1);

        let detail = panel.detail(&id).unwrap();
        assert_eq!(detail.completion, Some(75.0));
        assert!((detail.ring_offset() - 31.4).abs() < 1e-9);
        assert_eq!(detail.usage.screen_visits, vec![("Home".to_string(), 3)]);
    }

    #[tokio::test]
    async fn test_failed_detail_is_cached_empty() {
        let id = EntityId::new("7");
        let client = MockTransport::new()
            .failing(Endpoint::ProfileCompletion(id.clone()), ClientError::Network("down".into()))
            .client();

        let mut panel = CompaniesPanel::new();
        let (outcome, report) = panel.toggle_and_load(&client, &id).await;

        assert_eq!(outcome, Toggle::Expanded { fetch: true });
        assert_eq!(report.failures.len(), 2);
        assert_eq!(panel.detail(&id), Some(&CompanyDetail::default()));

        panel.toggle_and_load(&client, &id).await;
        panel.toggle_and_load(&client, &id).await;
        assert_eq!(client.transport().hits("profile-completion"), 1);
    }

    #[tokio::test]
    async fn test_bare_array_usage_and_flat_completion() {
        let id = EntityId::new("9");
        let client = MockTransport::new()
            .with(Endpoint::ProfileCompletion(id.clone()), json!({"completionPercentage": 20}))
            .with(
                Endpoint::Engagement { period: EngagementPeriod::Day, user: Some(id.clone()) },
                json!([]),
            )
            .client();

        let (detail, report) = fetch_company_detail(&client, &id).await;
        assert!(report.is_clean());
        assert_eq!(detail.completion, Some(20.0));
        assert_eq!(detail.usage, UserEngagement::default());
    }
}
