//! API Data Model
//!
//! Typed, read-only mirrors of the records served by the Bizzap API:
//!
//! - **company**: `Company`, `Lead` and the lead's embedded company
//! - **analytics**: signup, engagement and screen-usage aggregates
//! - **leads**: lead lifecycle and deal conversion aggregates
//! - **lenient**: field decoders tolerant of the API's inconsistent types

pub mod analytics;
pub mod company;
pub mod leads;
pub mod lenient;

pub use analytics::{
    completion_ring_offset, usage_bar_percent, ActiveUserMetrics, DailySignups, DaySignups,
    GrowthPeriod, LiveBucket, LiveUser, ProfileCompletion, ScreenStat, SignupSummary,
    UserEngagement, COMPLETION_RING,
};
pub use company::{parse_timestamp, Company, Lead, LeadCompany};
pub use leads::{ConsumedLeadMetrics, DealSummary, LeadSummary, LocationCount, MonthCount, TopCompany};
pub use lenient::EntityId;
