use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use email_address::EmailAddress;
use tracing::{error, info};

use super::notification_template::render_contact_notification;
use crate::modules::contact::domain::NewContactMessage;
use crate::modules::email::application::ports::incoming::use_cases::{
    ContactMailError, SendContactEmailUseCase,
};
use crate::modules::email::application::ports::outgoing::{EmailSender, OutgoingEmail};

pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// Sends contact form submissions to a fixed operator inbox with
/// `Reply-To` set to the submitter.
#[derive(Clone)]
pub struct ContactMailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    inbox_address: String,
}

impl fmt::Debug for ContactMailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactMailService")
            .field("sender", &"<dyn EmailSender>")
            .field("inbox_address", &self.inbox_address)
            .finish()
    }
}

impl ContactMailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, inbox_address: &str) -> Self {
        Self {
            sender,
            inbox_address: inbox_address.to_string(),
        }
    }
}

#[async_trait]
impl SendContactEmailUseCase for ContactMailService {
    async fn execute(&self, submission: NewContactMessage) -> Result<(), ContactMailError> {
        submission.validate()?;

        let reply_to = submission.email.trim();
        if !EmailAddress::is_valid(reply_to) {
            return Err(ContactMailError::InvalidEmail(reply_to.to_string()));
        }

        let html_body = render_contact_notification(&submission, Utc::now())
            .map_err(|e| ContactMailError::Template(e.to_string()))?;

        let email = OutgoingEmail {
            to: self.inbox_address.clone(),
            reply_to: Some(reply_to.to_string()),
            subject: format!("{}{}", SUBJECT_PREFIX, submission.subject.trim()),
            html_body,
        };

        match self.sender.send_email(&email).await {
            Ok(()) => {
                info!(from = %reply_to, "contact email sent");
                Ok(())
            }
            Err(e) => {
                error!(from = %reply_to, error = %e, "contact email delivery failed");
                Err(ContactMailError::Delivery(e))
            }
        }
    }
}
