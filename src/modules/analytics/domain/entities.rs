use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user_agent::classify_user_agent;
use crate::modules::content::domain::Content;

/// Referrer recorded when the browser reports none.
pub const DIRECT_REFERRER: &str = "Direct";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Desktop,
    Mobile,
    Tablet,
}

/// What the browser knows about a page view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    pub page: String,
    pub referrer: Option<String>,
    pub user_agent: String,
}

impl NavigationContext {
    pub fn new(page: impl Into<String>) -> Self {
        Self {
            page: page.into(),
            referrer: None,
            user_agent: String::new(),
        }
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// One page view. Created once and never edited.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    pub id: String,
    #[serde(alias = "timestamp")]
    pub timestamp_ms: i64,
    /// UTC calendar date, `YYYY-MM-DD`.
    #[serde(alias = "date")]
    pub iso_date: String,
    pub user_agent: String,
    pub referrer: String,
    pub page: String,
    pub session_id: String,
    pub device: DeviceKind,
    pub browser: String,
    pub os: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Content for VisitRecord {}

impl VisitRecord {
    pub fn new(ctx: &NavigationContext, session_id: &str, now: DateTime<Utc>) -> Self {
        let info = classify_user_agent(&ctx.user_agent);
        let referrer = match ctx.referrer.as_deref().map(str::trim) {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => DIRECT_REFERRER.to_string(),
        };

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp_ms: now.timestamp_millis(),
            iso_date: now.format("%Y-%m-%d").to_string(),
            user_agent: ctx.user_agent.clone(),
            referrer,
            page: ctx.page.clone(),
            session_id: session_id.to_string(),
            device: info.device,
            browser: info.browser.to_string(),
            os: info.os.to_string(),
            country: None,
            city: None,
        }
    }
}
