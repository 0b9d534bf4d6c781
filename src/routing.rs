//! Page Routing
//!
//! Maps a location (path plus query string) to a [`Route`]. A non-empty
//! `leadId` query parameter always selects the public lead view, whatever
//! the path.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::endpoints::Endpoint;
use crate::envelope::PublicEnvelope;
use crate::model::{parse_timestamp, EntityId, Lead};
use crate::transport::{ApiClient, Transport};

pub const LEAD_ID_PARAM: &str = "leadId";

/// Shown when a lead has no image
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/96";

/// Tabs of the user guide page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideTab {
    Login,
    Delete,
}

impl GuideTab {
    pub fn key(&self) -> &'static str {
        match self {
            GuideTab::Login => "login",
            GuideTab::Delete => "delete",
        }
    }

    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("delete") => GuideTab::Delete,
            _ => GuideTab::Login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    Landing,
    Login,
    Guide(GuideTab),
    Support,
    Report,
    Privacy,
    Admin,
    LeadAdmin,
    PublicLead(EntityId),
    NotFound,
}

impl Route {
    /// Resolve a path and raw query string (with or without the leading `?`)
    pub fn resolve(path: &str, query: &str) -> Self {
        let params = parse_query(query);
        let param = |name: &str| {
            params
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };

        if let Some(id) = param(LEAD_ID_PARAM).filter(|id| !id.is_empty()) {
            return Route::PublicLead(EntityId::new(id));
        }

        let path = path.trim_end_matches('/');
        match path {
            "" => Route::Landing,
            "/login" => Route::Login,
            "/guide" => Route::Guide(GuideTab::from_key(param("tab"))),
            "/support" => Route::Support,
            "/report" => Route::Report,
            "/privacy" => Route::Privacy,
            "/admin" => Route::Admin,
            "/admin/leads" => Route::LeadAdmin,
            _ => Route::NotFound,
        }
    }

    /// Location that resolves back to this route
    pub fn href(&self) -> String {
        match self {
            Route::Landing | Route::NotFound => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Guide(tab) => format!("/guide?tab={}", tab.key()),
            Route::Support => "/support".to_string(),
            Route::Report => "/report".to_string(),
            Route::Privacy => "/privacy".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::LeadAdmin => "/admin/leads".to_string(),
            Route::PublicLead(id) => format!(
                "/?{}={}",
                LEAD_ID_PARAM,
                urlencoding::encode(id.as_str())
            ),
        }
    }
}

/// Decoded `key=value` pairs; pairs that fail to decode are dropped
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(&key.replace('+', " ")).ok()?.into_owned();
            let value = urlencoding::decode(&value.replace('+', " ")).ok()?.into_owned();
            Some((key, value))
        })
        .collect()
}

pub const NO_LEAD_ID: &str = "No lead ID provided";
pub const LEAD_NOT_FOUND: &str = "Lead not found";
pub const LEAD_LOAD_FAILED: &str = "Failed to load lead";

/// Public lead page state
#[derive(Debug, Clone, PartialEq)]
pub enum PublicLeadState {
    Loading,
    Loaded(Box<Lead>),
    Missing(&'static str),
}

impl PublicLeadState {
    pub async fn load<T: Transport>(client: &ApiClient<T>, id: Option<&EntityId>) -> Self {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return PublicLeadState::Missing(NO_LEAD_ID);
        };

        match client.fetch_raw(&Endpoint::PublicLead(id.clone())).await {
            Ok(body) => match PublicEnvelope::from_value(body).into_data::<Lead>() {
                Some(lead) => PublicLeadState::Loaded(Box::new(lead)),
                None => {
                    tracing::info!(lead = %id, "Public lead not found");
                    PublicLeadState::Missing(LEAD_NOT_FOUND)
                }
            },
            Err(e) => {
                tracing::error!(lead = %id, error = %e, "Failed to load public lead");
                PublicLeadState::Missing(LEAD_LOAD_FAILED)
            }
        }
    }
}

/// Relative age of a timestamp as shown on lead cards
pub fn format_time_ago(past: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - past).num_minutes();
    let hours = minutes.div_euclid(60);
    let days = hours.div_euclid(24);

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        past.format("%b %-d").to_string()
    }
}

/// Display fields of a lead card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadCard {
    pub title: String,
    pub location: String,
    pub posted: String,
    pub quantity: String,
    pub budget: String,
    pub image: String,
    pub description: Option<String>,
    pub company_name: Option<String>,
    pub category: Option<String>,
    pub user_name: Option<String>,
    pub logo: Option<String>,
}

impl LeadCard {
    pub fn new(lead: &Lead, now: DateTime<Utc>) -> Self {
        let company = lead.company.as_ref();
        Self {
            title: lead.title_text().to_string(),
            location: location_label(lead.location.as_deref()).to_string(),
            posted: lead
                .created_at
                .as_deref()
                .and_then(parse_timestamp)
                .map(|created| format_time_ago(created, now))
                .unwrap_or_default(),
            quantity: quantity_label(lead.quantity.as_deref()).to_string(),
            budget: budget_label(lead.budget.as_deref()),
            image: lead
                .image_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            description: lead.description.clone(),
            company_name: company.and_then(|c| c.company_name.clone()),
            category: company.and_then(|c| c.category.clone()),
            user_name: company.and_then(|c| c.user_name.clone()),
            logo: company.and_then(|c| c.logo.clone()),
        }
    }
}

/// A zero amount or quantity reads as unspecified
fn nonzero(value: Option<&str>) -> Option<&str> {
    value.filter(|v| v.trim() != "0")
}

pub fn budget_label(budget: Option<&str>) -> String {
    match nonzero(budget) {
        Some(amount) => format!("₹{}", amount),
        None => "Negotiable".to_string(),
    }
}

pub fn quantity_label(quantity: Option<&str>) -> &str {
    nonzero(quantity).unwrap_or("N/A")
}

pub fn location_label(location: Option<&str>) -> &str {
    location.unwrap_or("Location not specified")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::transport::mock::MockTransport;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    #[test]
    fn test_lead_id_wins_over_path() {
        assert_eq!(
            Route::resolve("/support", "?leadId=abc"),
            Route::PublicLead(EntityId::new("abc"))
        );
        assert_eq!(
            Route::resolve("/", "utm=x&leadId=a%20b"),
            Route::PublicLead(EntityId::new("a b"))
        );
        assert_eq!(Route::resolve("/", "?leadId="), Route::Landing);
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::resolve("/", ""), Route::Landing);
        assert_eq!(Route::resolve("/admin/", ""), Route::Admin);
        assert_eq!(Route::resolve("/admin/leads", ""), Route::LeadAdmin);
        assert_eq!(Route::resolve("/guide", "tab=delete"), Route::Guide(GuideTab::Delete));
        assert_eq!(Route::resolve("/guide", ""), Route::Guide(GuideTab::Login));
        assert_eq!(Route::resolve("/nope", ""), Route::NotFound);
    }

    #[test]
    fn test_href_round_trips() {
        for route in [
            Route::Login,
            Route::Guide(GuideTab::Delete),
            Route::LeadAdmin,
            Route::PublicLead(EntityId::new("x/1")),
        ] {
            let href = route.href();
            let (path, query) = href.split_once('?').unwrap_or((&href, ""));
            assert_eq!(Route::resolve(path, query), route);
        }
    }

    #[test]
    fn test_time_ago() {
        let now = Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap();
        let ago = |d: Duration| format_time_ago(now - d, now);

        assert_eq!(ago(Duration::seconds(30)), "Just now");
        assert_eq!(ago(Duration::minutes(-5)), "Just now");
        assert_eq!(ago(Duration::minutes(59)), "59m ago");
        assert_eq!(ago(Duration::hours(23)), "23h ago");
        assert_eq!(ago(Duration::hours(30)), "Yesterday");
        assert_eq!(ago(Duration::days(6)), "6d ago");
        assert_eq!(ago(Duration::days(14)), "Mar 6");
    }

    #[test]
    fn test_lead_card_fallbacks() {
        let now = Utc.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap();
        let card = LeadCard::new(&Lead::default(), now);
        assert_eq!(card.location, "Location not specified");
        assert_eq!(card.quantity, "N/A");
        assert_eq!(card.budget, "Negotiable");
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.posted, "");

        assert_eq!(budget_label(Some("5000")), "₹5000");
    }

    #[test]
    fn test_zero_budget_and_quantity_are_unspecified() {
        let lead: Lead = serde_json::from_value(json!({"id": 9, "budget": 0, "quantity": 0})).unwrap();
        let card = LeadCard::new(&lead, Utc::now());
        assert_eq!(card.budget, "Negotiable");
        assert_eq!(card.quantity, "N/A");

        assert_eq!(budget_label(Some("10")), "₹10");
        assert_eq!(quantity_label(Some("500 kg")), "500 kg");
    }

    #[tokio::test]
    async fn test_public_lead_states() {
        let client = MockTransport::new()
            .with(
                Endpoint::PublicLead(EntityId::new("ok")),
                json!({"status": "success", "data": {"id": "ok", "title": "Cotton"}}),
            )
            .with(
                Endpoint::PublicLead(EntityId::new("gone")),
                json!({"status": "error", "message": "Lead not found"}),
            )
            .failing(
                Endpoint::PublicLead(EntityId::new("down")),
                ClientError::Network("offline".into()),
            )
            .client();

        async fn load(client: &ApiClient<MockTransport>, id: &str) -> PublicLeadState {
            PublicLeadState::load(client, Some(&EntityId::new(id))).await
        }

        match load(&client, "ok").await {
            PublicLeadState::Loaded(lead) => assert_eq!(lead.title_text(), "Cotton"),
            other => panic!("unexpected state {:?}", other),
        }
        assert_eq!(load(&client, "gone").await, PublicLeadState::Missing(LEAD_NOT_FOUND));
        assert_eq!(load(&client, "down").await, PublicLeadState::Missing(LEAD_LOAD_FAILED));
        assert_eq!(
            PublicLeadState::load(&client, None).await,
            PublicLeadState::Missing(NO_LEAD_ID)
        );
    }
}
