use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

use super::manager_screen::{ScreenContext, UnsavedChanges};
use crate::modules::admin::application::ports::outgoing::Confirmation;
use crate::modules::admin::domain::{Notice, NoticeBoard};
use crate::modules::contact::application::services::{ContactInbox, ImportError, InboxError};
use crate::modules::contact::domain::{ContactMessage, ContactStats, ReadFilter};
use crate::shared::events::{ChangeSignal, Watch};

pub const DELETE_MESSAGE_PROMPT: &str = "Are you sure you want to delete this message?";
pub const CLEAR_MESSAGES_PROMPT: &str =
    "Are you sure you want to delete all messages? This action cannot be undone.";
const UPDATED_MESSAGE: &str = "Messages updated successfully!";
const IMPORT_ERROR_TTL: Duration = Duration::from_secs(5);

/// Inbox screen. Every action is written through immediately, so there is
/// never anything unsaved.
pub struct ContactManager {
    inbox: ContactInbox,
    confirm: Arc<dyn Confirmation>,
    notices: NoticeBoard,
    changes: Watch,
    selected: Option<String>,
}

impl ContactManager {
    pub fn mount(ctx: &ScreenContext) -> Self {
        Self {
            inbox: ContactInbox::open(ctx.storage.clone(), ctx.notifier.clone()),
            confirm: Arc::clone(&ctx.confirm),
            notices: NoticeBoard::new(ctx.settings.notice_ttl),
            changes: ctx.notifier.watch(ChangeSignal::ContactMessagesChanged),
            selected: None,
        }
    }

    /// Re-reads the inbox if anyone wrote to it since the last look.
    pub fn sync(&mut self) {
        if self.changes.take() {
            self.inbox.refresh();
            if self
                .selected
                .as_deref()
                .is_some_and(|id| self.inbox.get(id).is_none())
            {
                self.selected = None;
            }
        }
    }

    pub fn messages(&self) -> &[ContactMessage] {
        self.inbox.messages()
    }

    pub fn filter(&self, query: &str, status: ReadFilter) -> Vec<&ContactMessage> {
        self.inbox.filter(query, status)
    }

    pub fn unread_count(&self) -> usize {
        self.inbox.unread_count()
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> ContactStats {
        self.inbox.stats_at(now)
    }

    pub fn select(&mut self, id: &str) -> Option<&ContactMessage> {
        let message = self.inbox.get(id)?;
        self.selected = Some(message.id.clone());
        Some(message)
    }

    pub fn selected(&self) -> Option<&ContactMessage> {
        self.selected.as_deref().and_then(|id| self.inbox.get(id))
    }

    pub fn reply_link(&self, id: &str) -> Option<String> {
        self.inbox.get(id).map(ContactMessage::reply_link)
    }

    fn report<T>(&mut self, result: Result<T, InboxError>) -> Result<T, InboxError> {
        match &result {
            Ok(_) => self.notices.success(UPDATED_MESSAGE),
            Err(e) => self.notices.error(e.to_string()),
        }
        result
    }

    pub fn toggle_read(&mut self, id: &str) -> Result<ContactMessage, InboxError> {
        let result = self.inbox.toggle_read(id);
        self.report(result)
    }

    pub fn toggle_star(&mut self, id: &str) -> Result<ContactMessage, InboxError> {
        let result = self.inbox.toggle_star(id);
        self.report(result)
    }

    /// Returns `Ok(false)` when the user declines.
    pub fn delete(&mut self, id: &str) -> Result<bool, InboxError> {
        if self.inbox.get(id).is_none() {
            return Err(InboxError::NotFound(id.to_string()));
        }
        if !self.confirm.confirm(DELETE_MESSAGE_PROMPT) {
            return Ok(false);
        }

        let result = self.inbox.delete(id);
        self.report(result)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Ok(true)
    }

    pub fn clear_all(&mut self) -> Result<bool, InboxError> {
        if !self.confirm.confirm(CLEAR_MESSAGES_PROMPT) {
            return Ok(false);
        }
        let result = self.inbox.clear_all();
        self.report(result)?;
        self.selected = None;
        Ok(true)
    }

    pub fn import(&mut self, text: &str) -> Result<usize, ImportError> {
        match self.inbox.import_json(text) {
            Ok(added) => {
                self.notices
                    .success(format!("Successfully imported {} new messages!", added));
                Ok(added)
            }
            Err(e) => {
                self.notices
                    .error_for(format!("Import failed: {}", e), IMPORT_ERROR_TTL);
                Err(e)
            }
        }
    }

    /// Suggested file name and pretty-printed JSON of every message.
    pub fn export(&self, now: DateTime<Utc>) -> Result<(String, String), serde_json::Error> {
        Ok((ContactInbox::export_file_name(now), self.inbox.export_json()?))
    }

    pub fn add_sample_messages(&mut self, now: DateTime<Utc>) -> Result<usize, InboxError> {
        let result = self.inbox.add_sample_messages(now);
        self.report(result)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn tick(&mut self, now: Instant) {
        self.notices.tick(now);
        self.sync();
    }
}

impl UnsavedChanges for ContactManager {
    fn has_unsaved_changes(&self) -> bool {
        false
    }
}
