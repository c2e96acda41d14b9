pub mod entities;
pub mod stats;
pub mod user_agent;

pub use entities::{DeviceKind, NavigationContext, VisitRecord, DIRECT_REFERRER};
pub use stats::{
    compute_stats, AnalyticsStats, DailyVisits, DeviceStats, PageVisits, ReferrerVisits,
    HISTORY_DAYS, TOP_N,
};
pub use user_agent::{classify_user_agent, UserAgentInfo};
