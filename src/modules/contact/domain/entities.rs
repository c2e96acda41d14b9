use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::content::domain::Content;

/// Oldest messages are evicted beyond this many.
pub const MAX_MESSAGES: usize = 100;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Epoch milliseconds.
    #[serde(alias = "timestamp")]
    pub received_at: i64,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub is_starred: bool,
}

impl Content for ContactMessage {}

impl ContactMessage {
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// `mailto:` link that opens a reply quoting the original message.
    pub fn reply_link(&self) -> String {
        let subject = format!("Re: {}", self.subject);
        let body = format!(
            "Hi {},\n\nThank you for your message. \n\n---\nOriginal message:\n{}",
            self.name, self.message
        );
        format!(
            "mailto:{}?subject={}&body={}",
            self.email,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields: {}", missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

/// A message as submitted, before it gets an id and timestamp.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewContactMessage {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    pub fn into_message(self, now: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message,
            received_at: now.timestamp_millis(),
            is_read: false,
            is_starred: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl ReadFilter {
    pub fn accepts(&self, message: &ContactMessage) -> bool {
        match self {
            ReadFilter::All => true,
            ReadFilter::Read => message.is_read,
            ReadFilter::Unread => !message.is_read,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactStats {
    pub total: usize,
    pub unread: usize,
    pub starred: usize,
    pub today: usize,
    pub this_week: usize,
    pub this_month: usize,
    pub oldest: Option<i64>,
    pub newest: Option<i64>,
}

impl ContactStats {
    /// Day, week and month are rolling windows ending at `now`.
    pub fn compute(messages: &[ContactMessage], now: DateTime<Utc>) -> Self {
        let now_ms = now.timestamp_millis();
        let within = |window: i64| {
            messages
                .iter()
                .filter(|m| now_ms.saturating_sub(m.received_at) < window)
                .count()
        };

        Self {
            total: messages.len(),
            unread: messages.iter().filter(|m| !m.is_read).count(),
            starred: messages.iter().filter(|m| m.is_starred).count(),
            today: within(DAY_MS),
            this_week: within(7 * DAY_MS),
            this_month: within(30 * DAY_MS),
            oldest: messages.iter().map(|m| m.received_at).min(),
            newest: messages.iter().map(|m| m.received_at).max(),
        }
    }
}
