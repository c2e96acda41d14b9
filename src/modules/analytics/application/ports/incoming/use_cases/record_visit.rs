use async_trait::async_trait;

use crate::modules::analytics::domain::VisitRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordVisitCommand {
    pub page: String,
    pub referrer: Option<String>,
    pub user_agent: String,
    /// Browser-tab session id; a fresh one is generated when absent.
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordVisitError {
    #[error("Invalid page path: {0}")]
    InvalidPage(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

#[async_trait]
pub trait RecordVisitUseCase: Send + Sync {
    async fn execute(&self, command: RecordVisitCommand) -> Result<VisitRecord, RecordVisitError>;
}
