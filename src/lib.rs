//! # Bizzap Admin
//!
//! Typed client and view-state controllers for the Bizzap B2B networking
//! platform's analytics API, shared by the `bizzap-cli` command-line tool
//! and the `bizzap-ui` browser front-end.
//!
//! ## Modules
//!
//! - [`model`]: lenient mirrors of the API records
//! - [`envelope`]: the single `{ data }`-or-bare response envelope
//! - [`endpoints`]: URL construction for every API resource
//! - [`transport`]: the HTTP seam, implemented natively and in the browser
//! - [`dashboard`], [`companies`], [`lead_analytics`]: admin dashboard state
//! - [`forms`]: waitlist and OTP login form state machines
//! - [`routing`]: location to page resolution and the public lead view
//! - [`content`]: copy for the static informational pages
//!
//! The `native` feature (on by default) adds the `reqwest` transport,
//! configuration loading and logging setup.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bizzap::{client, Config, DashboardSnapshot, DateRange};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = client::connect(&config.api)?;
//!
//!     let (snapshot, report) = DashboardSnapshot::load_initial(&api, &DateRange::default()).await;
//!     println!("{} companies, {} live", snapshot.companies.len(), snapshot.live_count());
//!
//!     for failure in &report.failures {
//!         eprintln!("{} failed: {}", failure.endpoint, failure.message);
//!     }
//!     Ok(())
//! }
//! ```

pub mod companies;
pub mod content;
pub mod dashboard;
pub mod date_range;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod forms;
pub mod lead_analytics;
pub mod model;
pub mod routing;
pub mod transport;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use companies::{fetch_company_detail, search, CompaniesPanel, CompanyDetail, Toggle};

pub use dashboard::{DashboardSnapshot, DashboardTab, EndpointFailure, LoadReport};

pub use date_range::{DatePreset, DateRange};

pub use endpoints::{ApiBase, EngagementPeriod, Endpoint, DEFAULT_API_BASE};

pub use envelope::{Envelope, PublicEnvelope};

pub use error::{ClientError, ClientResult, FormRejection};

pub use forms::{OtpLoginForm, OtpStep, PhonePolicy, WaitlistForm};

pub use lead_analytics::{LeadSnapshot, LeadTab};

pub use model::{Company, EntityId, Lead};

pub use routing::{GuideTab, LeadCard, PublicLeadState, Route};

pub use transport::{ApiClient, Transport};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
