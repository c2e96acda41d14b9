use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde_json::Value;

use crate::modules::contact::domain::{
    ContactMessage, ContactStats, NewContactMessage, ReadFilter, ValidationError, MAX_MESSAGES,
};
use crate::modules::content::application::services::{ContentStorage, ContentStore, SaveError};
use crate::modules::content::domain::ContentDomain;
use crate::shared::events::ChangeNotifier;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InboxError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Message {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Save(#[from] SaveError),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    Parse(String),

    #[error("Invalid file format: expected array")]
    NotAnArray,

    #[error("Invalid message at index {index}: missing required fields")]
    InvalidMessage { index: usize },

    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Contact messages, newest first. Every mutation is written immediately.
pub struct ContactInbox {
    store: ContentStore<Vec<ContactMessage>>,
}

impl ContactInbox {
    pub fn open(storage: ContentStorage, notifier: ChangeNotifier) -> Self {
        let store =
            ContentStore::initialize(ContentDomain::ContactMessages, Vec::new(), storage, notifier)
                .with_save_delay(Duration::ZERO);
        Self { store }
    }

    pub fn messages(&self) -> &[ContactMessage] {
        self.store.current()
    }

    pub fn get(&self, id: &str) -> Option<&ContactMessage> {
        self.messages().iter().find(|m| m.id == id)
    }

    pub fn refresh(&mut self) {
        self.store.reload();
    }

    fn commit(&mut self) -> Result<(), SaveError> {
        self.store.save_now().map_err(|e| {
            self.store.discard();
            e
        })
    }

    pub fn add_message(
        &mut self,
        new: NewContactMessage,
        now: DateTime<Utc>,
    ) -> Result<ContactMessage, InboxError> {
        new.validate()?;
        let message = new.into_message(now);

        self.store.reload();
        self.store.modify(|messages| {
            messages.insert(0, message.clone());
            messages.truncate(MAX_MESSAGES);
        });
        self.commit()?;
        Ok(message)
    }

    fn update<F>(&mut self, id: &str, edit: F) -> Result<ContactMessage, InboxError>
    where
        F: FnOnce(&mut ContactMessage),
    {
        let index = self
            .messages()
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| InboxError::NotFound(id.to_string()))?;

        let mut updated = self.messages()[index].clone();
        edit(&mut updated);
        self.store.modify(|messages| messages[index] = updated.clone());
        self.commit()?;
        Ok(updated)
    }

    pub fn toggle_read(&mut self, id: &str) -> Result<ContactMessage, InboxError> {
        self.update(id, |m| m.is_read = !m.is_read)
    }

    pub fn mark_read(&mut self, id: &str) -> Result<ContactMessage, InboxError> {
        self.update(id, |m| m.is_read = true)
    }

    pub fn toggle_star(&mut self, id: &str) -> Result<ContactMessage, InboxError> {
        self.update(id, |m| m.is_starred = !m.is_starred)
    }

    pub fn delete(&mut self, id: &str) -> Result<ContactMessage, InboxError> {
        let index = self
            .messages()
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| InboxError::NotFound(id.to_string()))?;

        let removed = self.messages()[index].clone();
        self.store.modify(|messages| {
            messages.remove(index);
        });
        self.commit()?;
        Ok(removed)
    }

    pub fn clear_all(&mut self) -> Result<(), InboxError> {
        self.store.clear()?;
        Ok(())
    }

    pub fn filter(&self, query: &str, status: ReadFilter) -> Vec<&ContactMessage> {
        self.messages()
            .iter()
            .filter(|m| status.accepts(m) && m.matches(query))
            .collect()
    }

    pub fn unread_count(&self) -> usize {
        self.messages().iter().filter(|m| !m.is_read).count()
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> ContactStats {
        ContactStats::compute(self.messages(), now)
    }

    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.messages())
    }

    pub fn export_file_name(now: DateTime<Utc>) -> String {
        format!("contact-messages-{}.json", now.format("%Y-%m-%d"))
    }

    /// Merges an exported file. Messages whose id is already present are
    /// skipped. Returns how many were added.
    pub fn import_json(&mut self, text: &str) -> Result<usize, ImportError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ImportError::Parse(e.to_string()))?;
        let Value::Array(items) = value else {
            return Err(ImportError::NotAnArray);
        };

        let mut imported = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            if !has_required_fields(&item) {
                return Err(ImportError::InvalidMessage { index });
            }
            let message: ContactMessage = serde_json::from_value(item)
                .map_err(|_| ImportError::InvalidMessage { index })?;
            imported.push(message);
        }

        self.store.reload();
        let existing: HashSet<String> = self.messages().iter().map(|m| m.id.clone()).collect();
        let fresh: Vec<ContactMessage> = imported
            .into_iter()
            .filter(|m| !existing.contains(&m.id))
            .collect();
        let added = fresh.len();

        self.store.modify(|messages| {
            messages.extend(fresh);
            messages.sort_by(|a, b| b.received_at.cmp(&a.received_at));
            messages.truncate(MAX_MESSAGES);
        });
        self.commit()?;

        tracing::info!(added, "contact messages imported");
        Ok(added)
    }

    /// Three demo messages received one, two and three days before `now`.
    pub fn add_sample_messages(&mut self, now: DateTime<Utc>) -> Result<usize, InboxError> {
        let samples = [
            (
                "John Doe",
                "john@example.com",
                "Project Inquiry",
                "Hi, I would like to discuss a potential project collaboration. Could we schedule a call?",
                1,
                false,
                false,
            ),
            (
                "Sarah Johnson",
                "sarah@company.com",
                "Job Opportunity",
                "Hello, we have an exciting fullstack developer position that might interest you. \
                 Please let me know if you would like to learn more.",
                2,
                true,
                true,
            ),
            (
                "Mike Chen",
                "mike@startup.io",
                "Technical Question",
                "I saw your portfolio and was impressed by your projects. I have a technical \
                 question about microservices architecture.",
                3,
                false,
                false,
            ),
        ];

        let messages: Vec<ContactMessage> = samples
            .into_iter()
            .map(|(name, email, subject, message, days_ago, is_read, is_starred)| {
                ContactMessage {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    subject: subject.to_string(),
                    message: message.to_string(),
                    received_at: (now - ChronoDuration::days(days_ago)).timestamp_millis(),
                    is_read,
                    is_starred,
                }
            })
            .collect();
        let added = messages.len();

        self.store.reload();
        self.store.modify(|current| {
            current.extend(messages);
            current.sort_by(|a, b| b.received_at.cmp(&a.received_at));
            current.truncate(MAX_MESSAGES);
        });
        self.commit()?;
        Ok(added)
    }
}

fn has_required_fields(item: &Value) -> bool {
    let non_blank = |field: &str| {
        item.get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.trim().is_empty())
    };
    let timestamp = item
        .get("receivedAt")
        .or_else(|| item.get("timestamp"))
        .and_then(Value::as_i64)
        .is_some_and(|t| t > 0);

    ["id", "name", "email", "subject", "message"]
        .into_iter()
        .all(non_blank)
        && timestamp
}
