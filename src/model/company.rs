//! Company and Lead records
//!
//! Mirrors of the tenant entities owned by the Bizzap platform. Nothing here
//! is persisted; records live only as long as the view that fetched them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient::{self, EntityId};

/// A registered business account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub gst_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub logo: Option<String>,
    /// Leads this company has posted
    #[serde(default, deserialize_with = "lenient::count")]
    pub posted_leads: u64,
    /// Posting quota, enforced server-side
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub posting_quota: Option<f64>,
    /// Leads this company may consume
    #[serde(default, deserialize_with = "lenient::count")]
    pub lead_quota: u64,
    /// Leads consumed so far
    #[serde(default, deserialize_with = "lenient::count")]
    pub consumed_leads: u64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub referral_code: Option<String>,
    /// ISO 8601 creation timestamp
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub leads: Vec<Lead>,
}

impl Company {
    /// Display name, empty when unknown
    pub fn name(&self) -> &str {
        self.company_name.as_deref().unwrap_or("")
    }

    /// Category or "Uncategorized"
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Uncategorized")
    }

    /// Upper-cased first letter of the name, `?` when there is no name
    pub fn initial(&self) -> String {
        self.company_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Parsed creation time
    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.created_at.as_deref()?)
    }

    /// Share of the lead quota already consumed, as a 0-100 percentage
    pub fn quota_used_percent(&self) -> f64 {
        if self.lead_quota == 0 {
            return 0.0;
        }
        (self.consumed_leads as f64 / self.lead_quota as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// "used/total" quota label
    pub fn quota_label(&self) -> String {
        format!("{}/{}", self.consumed_leads, self.lead_quota)
    }

    /// Most recent leads shown in the expanded row
    pub fn recent_leads(&self) -> &[Lead] {
        &self.leads[..self.leads.len().min(2)]
    }
}

/// Company reference embedded in a lead
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadCompany {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub user_name: Option<String>,
}

/// A posted business requirement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    /// Free text such as "500 kg"
    #[serde(default, deserialize_with = "lenient::text")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub consumed_count: u64,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reason_for_deactivation: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_record")]
    pub company: Option<LeadCompany>,
}

impl Lead {
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.created_at.as_deref()?)
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref()?.company_name.as_deref()
    }

    /// Reason shown in the health table
    pub fn deactivation_reason(&self) -> &str {
        self.reason_for_deactivation
            .as_deref()
            .unwrap_or("Manual Deactivation")
    }
}

/// Parse RFC 3339 timestamps, or bare `YYYY-MM-DD` dates at midnight UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_from_api_shape() {
        let company: Company = serde_json::from_value(json!({
            "id": 7,
            "companyName": "acme textiles",
            "phoneNumber": "+919876543210",
            "gstNumber": "33ABCDE1234F1Z5",
            "leadQuota": 10,
            "consumedLeads": 4,
            "postedLeads": "3",
            "referralCode": "ACME7",
            "createdAt": "2025-11-02T10:15:00.000Z",
            "leads": [
                {"id": "l1", "title": "Cotton yarn", "quantity": 500, "location": "Tiruppur"},
                {"id": "l2", "title": "Dyes"},
                {"id": "l3", "title": "Buttons"}
            ]
        }))
        .unwrap();

        assert_eq!(company.id.as_str(), "7");
        assert_eq!(company.initial(), "A");
        assert_eq!(company.category_label(), "Uncategorized");
        assert_eq!(company.posted_leads, 3);
        assert_eq!(company.quota_label(), "4/10");
        assert!((company.quota_used_percent() - 40.0).abs() < 1e-9);
        assert_eq!(company.recent_leads().len(), 2);
        assert_eq!(company.recent_leads()[0].quantity.as_deref(), Some("500"));
        assert!(company.created().is_some());
    }

    #[test]
    fn test_quota_edge_cases() {
        let mut company = Company::default();
        assert_eq!(company.quota_used_percent(), 0.0);
        assert_eq!(company.initial(), "?");

        company.lead_quota = 5;
        company.consumed_leads = 9;
        assert_eq!(company.quota_used_percent(), 100.0);
    }

    #[test]
    fn test_lead_company_and_reason() {
        let lead: Lead = serde_json::from_value(json!({
            "id": "abc",
            "title": "Steel rods",
            "viewCount": 12,
            "consumedCount": 2,
            "isActive": false,
            "company": {"companyName": "Forge Co", "userName": "Ravi"}
        }))
        .unwrap();

        assert_eq!(lead.company_name(), Some("Forge Co"));
        assert_eq!(lead.deactivation_reason(), "Manual Deactivation");
        assert!(!lead.is_active);
    }

    #[test]
    fn test_parse_timestamp_forms() {
        assert!(parse_timestamp("2025-01-05").is_some());
        assert!(parse_timestamp("2025-01-05T08:00:00Z").is_some());
        assert!(parse_timestamp("last tuesday").is_none());
    }
}
