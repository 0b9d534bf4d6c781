//! Bizzap CLI
//!
//! Command-line access to the Bizzap admin analytics:
//! - Dashboard overview, signups and app usage
//! - Company listing, detail and deletion
//! - Lead analytics and public lead lookup
//! - Waitlist signups

use anyhow::{bail, Context};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

use bizzap::companies::{fetch_company_detail, search};
use bizzap::config::{generate_default_config, Config};
use bizzap::dashboard::{DashboardSnapshot, LoadReport};
use bizzap::date_range::{DatePreset, DateRange};
use bizzap::forms::WaitlistForm;
use bizzap::lead_analytics::LeadSnapshot;
use bizzap::logging::init_logging;
use bizzap::routing::{LeadCard, PublicLeadState};
use bizzap::{client, EntityId};

#[derive(Parser)]
#[command(name = "bizzap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Admin analytics for the Bizzap B2B networking platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API origin (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// KPIs, growth rates and live users
    Overview,

    /// Daily signups for a date range (default: last week)
    Signups {
        /// First day, YYYY-MM-DD
        #[arg(long, conflicts_with = "preset")]
        start: Option<NaiveDate>,
        /// Last day, YYYY-MM-DD
        #[arg(long, conflicts_with = "preset")]
        end: Option<NaiveDate>,
        /// Quick range (today, week, month)
        #[arg(long)]
        preset: Option<DatePreset>,
    },

    /// Screen popularity and weekly power users
    Usage,

    /// List companies
    Companies {
        /// Filter by company name or phone number
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Profile completion and today's usage for one company
    Company {
        id: String,
    },

    /// Delete a company
    DeleteCompany {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Lead inventory, deals and location analytics
    Leads,

    /// Public view of a single lead
    Lead {
        id: String,
    },

    /// Join the waitlist with a phone number
    Waitlist {
        phone: String,
        /// Country code (default from config)
        #[arg(long)]
        country_code: Option<String>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// One titled table of output
struct Section {
    title: &'static str,
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Section {
    fn new(title: &'static str, headers: &[&'static str]) -> Self {
        Self {
            title,
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    fn row(mut self, cells: Vec<String>) -> Self {
        self.rows.push(cells);
        self
    }

    fn rows(mut self, rows: impl IntoIterator<Item = Vec<String>>) -> Self {
        self.rows.extend(rows);
        self
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Logging disabled: {}", e);
    }

    let format = cli.format;
    let api = client::connect(&config.api)?;
    tracing::debug!(base = api.base().as_str(), "Connected");

    match cli.command {
        Commands::Overview => {
            let (snapshot, report) = DashboardSnapshot::load_initial(&api, &DateRange::default()).await;
            warn_failures(&report);

            let kpis = snapshot.kpis();
            let growth = snapshot.growth_rows();
            let sections = vec![
                Section::new("Key metrics", &["Metric", "Value", "Note"]).rows(kpis.iter().map(|k| {
                    vec![
                        k.label.to_string(),
                        k.value.to_string(),
                        k.sub.clone().unwrap_or_default(),
                    ]
                })),
                Section::new("Growth rate", &["Period", "Signups", "Growth"]).rows(
                    growth
                        .iter()
                        .map(|(label, period)| vec![label.to_string(), period.count.to_string(), period.growth_label()]),
                ),
                Section::new("Live users", &["Company", "Screen"]).rows(snapshot.live_users.iter().map(|u| {
                    vec![
                        u.company_name.clone().unwrap_or_default(),
                        u.screen_name.clone().unwrap_or_default(),
                    ]
                })),
            ];

            emit(
                format,
                &sections,
                &serde_json::json!({
                    "kpis": kpis,
                    "growth": growth,
                    "liveCount": snapshot.live_count(),
                    "liveUsers": snapshot.live_users,
                    "liveDistribution": snapshot.live_distribution,
                }),
            )?;
        }

        Commands::Signups { start, end, preset } => {
            let range = signup_range(start, end, preset);
            let mut snapshot = DashboardSnapshot::default();
            let report = snapshot.refresh_signups(&api, &range).await;
            fail_on(&report)?;

            let signups = &snapshot.signups;
            let mut sections = vec![Section::new("Signups", &["Range", "Total"])
                .row(vec![range.to_string(), signups.total_signups.to_string()])];
            if signups.has_data() {
                sections.push(
                    Section::new("Daily breakdown", &["Day", "Count", "Companies"]).rows(
                        signups.daily_breakdown.iter().map(|day| {
                            vec![
                                day.heading(),
                                day.count.to_string(),
                                day.companies.iter().map(|c| c.name()).collect::<Vec<_>>().join(", "),
                            ]
                        }),
                    ),
                );
            }

            emit(format, &sections, signups)?;
        }

        Commands::Usage => {
            let (snapshot, report) = DashboardSnapshot::load_initial(&api, &DateRange::default()).await;
            warn_failures(&report);

            let power_users = snapshot.power_users();
            let sections = vec![
                Section::new("Screen popularity", &["Screen", "Visits", "Avg time (s)"]).rows(
                    snapshot.screens.iter().map(|s| {
                        vec![
                            s.screen_name.clone().unwrap_or_default(),
                            s.visit_count.to_string(),
                            format!("{:.1}", s.avg_time_seconds),
                        ]
                    }),
                ),
                Section::new("Power users (week)", &["Company", "Total time", "Peak time", "Top screen"]).rows(
                    power_users
                        .iter()
                        .map(|u| vec![u.company.clone(), u.total_time.clone(), u.peak_time.clone(), u.top_screen.clone()]),
                ),
            ];

            emit(
                format,
                &sections,
                &serde_json::json!({ "screens": snapshot.screens, "powerUsers": power_users }),
            )?;
        }

        Commands::Companies { search: term } => {
            let mut snapshot = DashboardSnapshot::default();
            let report = snapshot.refresh_companies(&api).await;
            fail_on(&report)?;

            let matches = search(&snapshot.companies, term.as_deref().unwrap_or(""));
            let sections = vec![Section::new(
                "Companies",
                &["ID", "Name", "Category", "Phone", "Leads", "Quota", "Joined"],
            )
            .rows(matches.iter().map(|c| {
                vec![
                    c.id.to_string(),
                    c.name().to_string(),
                    c.category_label().to_string(),
                    c.phone_number.clone().unwrap_or_default(),
                    c.posted_leads.to_string(),
                    c.quota_label(),
                    c.created().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
                ]
            }))];

            emit(format, &sections, &matches)?;
        }

        Commands::Company { id } => {
            let (detail, report) = fetch_company_detail(&api, &EntityId::new(id)).await;
            warn_failures(&report);

            let usage = &detail.usage;
            let sections = vec![
                Section::new("Profile", &["Completion", "Time today", "Peak time", "Top screen"]).row(vec![
                    format!("{}%", detail.completion_percent()),
                    usage.minutes_label(),
                    usage.peak_time_range.clone().unwrap_or_default(),
                    usage.top_screen().unwrap_or("-").to_string(),
                ]),
                Section::new("Screen visits", &["Screen", "Visits"])
                    .rows(usage.screen_visits.iter().map(|(screen, n)| vec![screen.clone(), n.to_string()])),
            ];

            emit(format, &sections, &detail)?;
        }

        Commands::DeleteCompany { id, yes } => {
            if !yes {
                bail!("refusing to delete company {} without --yes", id);
            }
            let id = EntityId::new(id);
            let mut snapshot = DashboardSnapshot::default();
            let report = snapshot
                .delete_company(&api, &id)
                .await
                .with_context(|| format!("deleting company {}", id))?;
            warn_failures(&report);
            println!("Deleted company {} ({} remaining)", id, snapshot.companies.len());
        }

        Commands::Leads => {
            let (snapshot, report) = LeadSnapshot::load(&api).await;
            warn_failures(&report);

            let kpis = snapshot.kpis();
            let status = snapshot.status_distribution();
            let locations = snapshot.location_density();
            let sections = vec![
                Section::new("Key metrics", &["Metric", "Value", "Note"])
                    .rows(kpis.iter().map(|k| vec![k.title.to_string(), k.value.clone(), k.sub.to_string()])),
                Section::new("Deal status", &["Status", "Deals"])
                    .rows(status.iter().map(|s| vec![s.name.to_string(), s.value.to_string()])),
                Section::new("Monthly inventory", &["Month", "Leads"]).rows(
                    snapshot
                        .monthly
                        .iter()
                        .map(|m| vec![m.month.clone().unwrap_or_default(), m.count.to_string()]),
                ),
                Section::new("Location density", &["Location", "Leads", "Share"]).rows(
                    locations
                        .iter()
                        .map(|l| vec![l.location.clone(), l.count.to_string(), format!("{:.1}%", l.percent)]),
                ),
                Section::new("Top companies", &["Company", "Conversion"]).rows(snapshot.top_companies().iter().map(
                    |c| {
                        vec![
                            c.company_name.clone().unwrap_or_default(),
                            format!("{}%", c.conversion_rate),
                        ]
                    },
                )),
                Section::new("Most viewed", &["Lead", "Company", "Views"]).rows(snapshot.most_viewed.iter().map(
                    |l| {
                        vec![
                            l.title_text().to_string(),
                            l.company_name().unwrap_or("").to_string(),
                            l.view_count.to_string(),
                        ]
                    },
                )),
                Section::new("Deactivated", &["Lead", "Reason"]).rows(
                    snapshot
                        .deactivated
                        .iter()
                        .map(|l| vec![l.title_text().to_string(), l.deactivation_reason().to_string()]),
                ),
            ];

            emit(
                format,
                &sections,
                &serde_json::json!({
                    "kpis": kpis,
                    "status": status,
                    "locations": locations,
                    "snapshot": snapshot,
                }),
            )?;
        }

        Commands::Lead { id } => {
            let id = EntityId::new(id);
            let lead = match PublicLeadState::load(&api, Some(&id)).await {
                PublicLeadState::Loaded(lead) => lead,
                PublicLeadState::Missing(message) => bail!("{}", message),
                PublicLeadState::Loading => bail!("lead {} did not load", id),
            };

            let card = LeadCard::new(&lead, Utc::now());
            let sections = vec![Section::new(
                "Lead",
                &["Title", "Company", "Location", "Posted", "Quantity", "Budget"],
            )
            .row(vec![
                card.title.clone(),
                card.company_name.clone().unwrap_or_default(),
                card.location.clone(),
                card.posted.clone(),
                card.quantity.clone(),
                card.budget.clone(),
            ])];

            emit(format, &sections, &card)?;
        }

        Commands::Waitlist { phone, country_code } => {
            let mut form = WaitlistForm::new();
            form.set_country_code(country_code.as_deref().unwrap_or(&config.forms.default_country_code));
            form.set_phone(&phone);
            let number = form.full_number();

            form.submit(api.transport(), &config.forms.waitlist_url).await?;
            println!("Added {} to the waitlist", number);
        }

        Commands::Config { output } => {
            let template = generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &template).with_context(|| format!("writing {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", template),
            }
        }
    }

    Ok(())
}

fn signup_range(start: Option<NaiveDate>, end: Option<NaiveDate>, preset: Option<DatePreset>) -> DateRange {
    if let Some(preset) = preset {
        return DateRange::preset(preset);
    }
    let default = DateRange::default();
    DateRange::new(start.unwrap_or(default.start), end.unwrap_or(default.end))
}

fn warn_failures(report: &LoadReport) {
    for failure in &report.failures {
        eprintln!("warning: {} unavailable ({})", failure.endpoint, failure.message);
    }
}

/// Single-request commands have nothing to show when their request fails
fn fail_on(report: &LoadReport) -> anyhow::Result<()> {
    match report.failures.first() {
        Some(failure) => bail!("{} failed: {}", failure.endpoint, failure.message),
        None => Ok(()),
    }
}

fn emit<J: Serialize + ?Sized>(format: OutputFormat, sections: &[Section], json: &J) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(json)?),
        OutputFormat::Csv => print_csv(sections)?,
        OutputFormat::Table => print_table(sections),
    }
    Ok(())
}

fn print_table(sections: &[Section]) {
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", section.title);

        if section.rows.is_empty() {
            println!("  No data");
            continue;
        }

        let widths: Vec<usize> = section
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                section
                    .rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        println!("{}", table_line(&section.headers, &widths));
        println!("{}", "-".repeat(widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)));
        for row in &section.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            println!("{}", table_line(&cells, &widths));
        }
    }
}

fn table_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Multi-section output gets a leading `section` column
fn print_csv(sections: &[Section]) -> anyhow::Result<()> {
    let labelled = sections.len() > 1;
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(io::stdout());

    for section in sections {
        let prefix: Vec<&str> = if labelled { vec![section.title] } else { Vec::new() };

        let header = if labelled {
            std::iter::once("section").chain(section.headers.iter().copied()).collect::<Vec<_>>()
        } else {
            section.headers.clone()
        };
        writer.write_record(&header)?;

        for row in &section.rows {
            writer.write_record(prefix.iter().copied().chain(row.iter().map(String::as_str)))?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_signups_preset() {
        let cli = Cli::try_parse_from(["bizzap", "signups", "--preset", "month", "-f", "csv"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Csv);
        match cli.command {
            Commands::Signups { preset, start, end } => {
                assert_eq!(preset, Some(DatePreset::Month));
                assert!(start.is_none() && end.is_none());
            }
            _ => panic!("expected signups"),
        }
    }

    #[test]
    fn test_preset_conflicts_with_dates() {
        assert!(Cli::try_parse_from(["bizzap", "signups", "--preset", "week", "--start", "2026-01-01"]).is_err());
    }

    #[test]
    fn test_signup_range_fills_missing_bound() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let range = signup_range(Some(start), None, None);
        assert_eq!(range.start, start);
        assert_eq!(range.end, DateRange::default().end);
    }

    #[test]
    fn test_fail_on_reports_first_failure() {
        let mut report = LoadReport::default();
        assert!(fail_on(&report).is_ok());

        report.failures.push(bizzap::EndpointFailure {
            endpoint: "companies",
            message: "HTTP 500".to_string(),
        });
        let err = fail_on(&report).unwrap_err().to_string();
        assert!(err.contains("companies"));
    }
}
