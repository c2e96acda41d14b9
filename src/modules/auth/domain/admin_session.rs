use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::content::domain::Content;

pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Remembered admin login, stored as `{ username, isAuthenticated, timestamp }`
/// with `timestamp` in epoch milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub username: String,
    #[serde(default)]
    pub is_authenticated: bool,
    pub timestamp: i64,
}

impl AdminSession {
    pub fn authenticated(username: &str, now: DateTime<Utc>) -> Self {
        Self {
            username: username.to_string(),
            is_authenticated: true,
            timestamp: now.timestamp_millis(),
        }
    }

    /// Authenticated and strictly younger than `ttl` at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.is_authenticated && self.timestamp > now.timestamp_millis() - ttl.num_milliseconds()
    }
}

impl Content for AdminSession {
    fn is_well_formed(&self) -> bool {
        !self.username.trim().is_empty()
    }
}
