//! Lead Command Center
//!
//! Lead lifecycle and conversion analytics. Unlike the main dashboard these
//! endpoints always wrap their payload in `data`, and a bare payload is
//! treated as missing.

use futures_util::join;
use serde::{Deserialize, Serialize};

use crate::dashboard::LoadReport;
use crate::endpoints::Endpoint;
use crate::model::{lenient, ConsumedLeadMetrics, Lead, LeadSummary, LocationCount, MonthCount};
use crate::transport::{ApiClient, Transport};

/// Chart palette, cycled by slice index
pub const PALETTE: [&str; 5] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6"];

/// Locations listed in the regional density panel
pub const TOP_LOCATIONS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadTab {
    Overview,
    Conversions,
    Health,
}

impl LeadTab {
    pub const ALL: [LeadTab; 3] = [LeadTab::Overview, LeadTab::Conversions, LeadTab::Health];

    pub fn label(&self) -> &'static str {
        match self {
            LeadTab::Overview => "Overview",
            LeadTab::Conversions => "Conversions",
            LeadTab::Health => "Health",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Deactivated {
    #[serde(default, deserialize_with = "lenient::records")]
    inactive: Vec<Lead>,
}

/// Everything the lead command center renders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeadSnapshot {
    pub summary: LeadSummary,
    pub metrics: Option<ConsumedLeadMetrics>,
    pub locations: Vec<LocationCount>,
    /// Oldest month first
    pub monthly: Vec<MonthCount>,
    pub most_viewed: Vec<Lead>,
    pub deactivated: Vec<Lead>,
}

/// One slice of the deal status pie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSlice {
    pub name: &'static str,
    pub value: u64,
    pub color: &'static str,
}

/// One row of the regional density panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationShare {
    pub location: String,
    pub count: u64,
    /// Share of all leads, 0-100
    pub percent: f64,
}

/// Top-row KPI card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadKpi {
    pub title: &'static str,
    pub value: String,
    pub sub: &'static str,
}

impl LeadSnapshot {
    /// Fetch all six lead analytics endpoints concurrently
    pub async fn load<T: Transport>(client: &ApiClient<T>) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        let (summary, metrics, locations, monthly, viewed, deactivated) = join!(
            client.fetch(&Endpoint::LeadSummary),
            client.fetch(&Endpoint::ConsumedLeadMetrics),
            client.fetch(&Endpoint::LeadsByLocation),
            client.fetch(&Endpoint::LeadsByMonth),
            client.fetch(&Endpoint::MostViewedLeads),
            client.fetch(&Endpoint::DeactivatedLeads),
        );

        let mut monthly: Vec<MonthCount> = report.take(&Endpoint::LeadsByMonth, monthly).data_list();
        // Served newest first
        monthly.reverse();

        let snapshot = LeadSnapshot {
            summary: report
                .take(&Endpoint::LeadSummary, summary)
                .data_object()
                .unwrap_or_default(),
            metrics: report.take(&Endpoint::ConsumedLeadMetrics, metrics).data_object(),
            locations: report.take(&Endpoint::LeadsByLocation, locations).data_list(),
            monthly,
            most_viewed: report.take(&Endpoint::MostViewedLeads, viewed).data_list(),
            deactivated: report
                .take(&Endpoint::DeactivatedLeads, deactivated)
                .data_object::<Deactivated>()
                .unwrap_or_default()
                .inactive,
        };

        tracing::info!(
            total_leads = snapshot.summary.total_leads,
            deactivated = snapshot.deactivated.len(),
            failures = report.failures.len(),
            "Lead analytics loaded"
        );
        (snapshot, report)
    }

    pub fn kpis(&self) -> [LeadKpi; 4] {
        let deals = self.metrics.as_ref().map(|m| &m.summary);
        [
            LeadKpi {
                title: "Total Inventory",
                value: self.summary.total_leads.to_string(),
                sub: "All time posted",
            },
            LeadKpi {
                title: "Conversion Rate",
                value: deals
                    .and_then(|d| d.conversion_rate.clone())
                    .unwrap_or_else(|| "0".to_string()),
                sub: "Leads to Deals",
            },
            LeadKpi {
                title: "Deal Volume",
                value: format_inr(deals.map(|d| d.total_deal_value).unwrap_or(0.0)),
                sub: "Completed value",
            },
            LeadKpi {
                title: "Avg. Lifespan",
                value: lifespan_label(self.summary.average_lead_lifespan.as_deref()),
                sub: "Time to deactivation",
            },
        ]
    }

    pub fn status_distribution(&self) -> Vec<StatusSlice> {
        let deals = self
            .metrics
            .as_ref()
            .map(|m| m.summary.clone())
            .unwrap_or_default();

        [
            ("Completed", deals.completed_deals),
            ("Pending", deals.pending_deals),
            ("Failed", deals.failed_deals),
            ("No Response", deals.no_response_deals),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, value))| StatusSlice {
            name,
            value,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
    }

    pub fn location_density(&self) -> Vec<LocationShare> {
        let total = self.summary.total_leads;
        self.locations
            .iter()
            .take(TOP_LOCATIONS)
            .map(|loc| LocationShare {
                location: loc.location.clone().unwrap_or_default(),
                count: loc.count,
                percent: if total == 0 {
                    0.0
                } else {
                    (loc.count as f64 / total as f64 * 100.0).min(100.0)
                },
            })
            .collect()
    }

    pub fn top_companies(&self) -> &[crate::model::TopCompany] {
        self.metrics
            .as_ref()
            .map(|m| m.top_performing_companies.as_slice())
            .unwrap_or(&[])
    }
}

/// "N Days"; a missing lifespan reads "0 Days"
pub fn lifespan_label(days: Option<&str>) -> String {
    format!("{} Days", days.unwrap_or("0"))
}

/// Rupee amount with thousands separators and at most three decimals
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0".to_string();
    }

    let rounded = (amount.abs() * 1000.0).round() / 1000.0;
    let whole = rounded.trunc() as u64;
    let fraction = format!("{:.3}", rounded.fract());
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0').trim_end_matches('.');

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && rounded > 0.0 { "-" } else { "" };
    format!("{}₹{}{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::transport::mock::MockTransport;
    use serde_json::json;

    fn mock() -> MockTransport {
        MockTransport::new()
            .with(
                Endpoint::LeadSummary,
                json!({"data": {"totalLeads": 200, "activeLeads": 150, "averageLeadLifespan": 9}}),
            )
            .with(
                Endpoint::ConsumedLeadMetrics,
                json!({"data": {
                    "summary": {"conversionRate": "12.5%", "totalDealValue": 1250000,
                                "completedDeals": 5, "pendingDeals": 3, "failedDeals": 1, "noResponseDeals": 2},
                    "topPerformingCompanies": [{"companyName": "Acme", "conversionRate": 40}]
                }}),
            )
            .with(
                Endpoint::LeadsByLocation,
                json!({"data": [{"location": "Tiruppur", "count": 50}, {"location": "Chennai", "count": 20}]}),
            )
            .with(
                Endpoint::LeadsByMonth,
                json!({"data": [{"month": "2026-03", "count": 9}, {"month": "2026-02", "count": 4}]}),
            )
            .with(Endpoint::MostViewedLeads, json!({"data": [{"id": 1, "title": "Yarn", "viewCount": 80}]}))
            .with(
                Endpoint::DeactivatedLeads,
                json!({"data": {"inactive": [{"id": 2, "title": "Dyes", "reasonForDeactivation": null}]}}),
            )
    }

    #[tokio::test]
    async fn test_load_and_derive() {
        let client = mock().client();
        let (snapshot, report) = LeadSnapshot::load(&client).await;

        assert!(report.is_clean());
        assert_eq!(snapshot.monthly[0].month.as_deref(), Some("2026-02"));
        assert_eq!(snapshot.most_viewed.len(), 1);
        assert_eq!(snapshot.deactivated[0].deactivation_reason(), "Manual Deactivation");
        assert_eq!(snapshot.top_companies()[0].conversion_rate, 40.0);

        let kpis = snapshot.kpis();
        assert_eq!(kpis[0].value, "200");
        assert_eq!(kpis[1].value, "12.5%");
        assert_eq!(kpis[2].value, "₹1,250,000");
        assert_eq!(kpis[3].value, "9 Days");

        let pie = snapshot.status_distribution();
        assert_eq!(pie.len(), 4);
        assert_eq!(pie[3].name, "No Response");
        assert_eq!(pie[3].value, 2);
        assert_eq!(pie[3].color, "#ef4444");

        let density = snapshot.location_density();
        assert_eq!(density[0].percent, 25.0);
        assert_eq!(density[1].percent, 10.0);
    }

    #[tokio::test]
    async fn test_bare_payloads_are_ignored() {
        let client = MockTransport::new()
            .with(Endpoint::LeadSummary, json!({"totalLeads": 5}))
            .with(Endpoint::LeadsByLocation, json!([{"location": "Madurai", "count": 1}]))
            .failing(Endpoint::ConsumedLeadMetrics, ClientError::Timeout)
            .client();

        let (snapshot, report) = LeadSnapshot::load(&client).await;

        assert_eq!(snapshot.summary, LeadSummary::default());
        assert!(snapshot.locations.is_empty());
        assert!(snapshot.metrics.is_none());
        assert_eq!(report.failures.len(), 4);

        let kpis = snapshot.kpis();
        assert_eq!(kpis[0].value, "0");
        assert_eq!(kpis[1].value, "0");
        assert_eq!(kpis[2].value, "₹0");
        assert_eq!(kpis[3].value, "0 Days");
        assert!(snapshot.status_distribution().iter().all(|s| s.value == 0));
    }

    #[test]
    fn test_density_with_zero_total() {
        let snapshot = LeadSnapshot {
            locations: (0..12)
                .map(|i| LocationCount { location: Some(format!("City {}", i)), count: 3 })
                .collect(),
            ..Default::default()
        };
        let density = snapshot.location_density();
        assert_eq!(density.len(), TOP_LOCATIONS);
        assert!(density.iter().all(|row| row.percent == 0.0));
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(1234567.891), "₹1,234,567.891");
        assert_eq!(format_inr(2500.5), "₹2,500.5");
        assert_eq!(format_inr(-1500.0), "-₹1,500");
    }
}
