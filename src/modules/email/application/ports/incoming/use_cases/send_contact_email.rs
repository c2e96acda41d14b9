use async_trait::async_trait;

use crate::modules::contact::domain::{NewContactMessage, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactMailError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Failed to render notification: {0}")]
    Template(String),

    #[error("Email delivery failed: {0}")]
    Delivery(String),
}

/// Forwards a contact form submission to the site owner. Fire once: a
/// failed delivery is reported, never retried.
#[async_trait]
pub trait SendContactEmailUseCase: Send + Sync {
    async fn execute(&self, submission: NewContactMessage) -> Result<(), ContactMailError>;
}
