use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::modules::email::application::ports::outgoing::{EmailSender, OutgoingEmail};

/// Keeps sent mail in memory instead of delivering it. Used when no SMTP
/// relay is configured, and by tests that want to inspect what was sent.
#[derive(Debug, Clone, Default)]
pub struct RecordingEmailSender {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
    failure: Option<String>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send fails with `reason` and nothing is recorded.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<OutgoingEmail>> {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), String> {
        if let Some(reason) = &self.failure {
            return Err(reason.clone());
        }
        tracing::debug!(to = %email.to, subject = %email.subject, "email recorded, not delivered");
        self.lock().push(email.clone());
        Ok(())
    }
}
