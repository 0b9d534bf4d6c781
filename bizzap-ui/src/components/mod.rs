//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chart;
pub mod date_filter;
pub mod kpi_card;
pub mod loading;
pub mod nav;
pub mod phone_form;
pub mod toast;

pub use chart::{Chart, ChartKind, ChartPoint};
pub use date_filter::DateFilter;
pub use kpi_card::KpiCard;
pub use loading::{CardSkeleton, ChartSkeleton, Loading};
pub use nav::{Footer, SiteNav};
pub use phone_form::WaitlistPhoneForm;
pub use toast::Toast;
