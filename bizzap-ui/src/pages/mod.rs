//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
pub mod guide;
pub mod landing;
pub mod lead_admin;
pub mod login;
pub mod privacy;
pub mod public_lead;
pub mod report;
pub mod support;

pub use admin::Admin;
pub use guide::Guide;
pub use landing::Landing;
pub use lead_admin::LeadAdmin;
pub use login::Login;
pub use privacy::Privacy;
pub use public_lead::PublicLead;
pub use report::Report;
pub use support::Support;
