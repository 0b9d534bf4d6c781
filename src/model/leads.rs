//! Lead lifecycle analytics
//!
//! Aggregates behind the lead command center: inventory summary, deal
//! conversion metrics and geographic/monthly distributions.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Inventory-wide lead summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSummary {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_leads: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub active_leads: u64,
    /// Mean days from posting to deactivation
    #[serde(default, deserialize_with = "lenient::text")]
    pub average_lead_lifespan: Option<String>,
}

/// Deal outcome counters for consumed leads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealSummary {
    /// Rendered as sent, e.g. "12.5%"
    #[serde(default, deserialize_with = "lenient::text")]
    pub conversion_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_deal_value: f64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub completed_deals: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub pending_deals: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub failed_deals: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub no_response_deals: u64,
}

/// Company ranked by lead-to-deal conversion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCompany {
    #[serde(default, deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub conversion_rate: f64,
}

/// Consumed-lead metrics payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumedLeadMetrics {
    #[serde(default, deserialize_with = "lenient::record")]
    pub summary: DealSummary,
    #[serde(default, deserialize_with = "lenient::records")]
    pub top_performing_companies: Vec<TopCompany>,
}

/// Lead count for one location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCount {
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u64,
}

/// Leads posted in one month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCount {
    #[serde(default, deserialize_with = "lenient::text")]
    pub month: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metrics_with_missing_summary() {
        let metrics: ConsumedLeadMetrics = serde_json::from_value(json!({
            "summary": null,
            "topPerformingCompanies": [
                {"companyName": "Acme", "conversionRate": "40"},
                "garbage"
            ]
        }))
        .unwrap();

        assert_eq!(metrics.summary, DealSummary::default());
        assert_eq!(metrics.top_performing_companies.len(), 1);
        assert_eq!(metrics.top_performing_companies[0].conversion_rate, 40.0);
    }

    #[test]
    fn test_lifespan_accepts_numbers() {
        let summary: LeadSummary =
            serde_json::from_value(json!({"totalLeads": 90, "averageLeadLifespan": 12.5})).unwrap();
        assert_eq!(summary.average_lead_lifespan.as_deref(), Some("12.5"));
    }
}
