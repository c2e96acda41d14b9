use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::analytics::application::ports::incoming::use_cases::{
    RecordVisitCommand, RecordVisitError, RecordVisitUseCase,
};
use crate::modules::analytics::application::services::AnalyticsRecorder;
use crate::modules::analytics::domain::{NavigationContext, VisitRecord};

pub struct RecordVisitService {
    recorder: Arc<Mutex<AnalyticsRecorder>>,
}

impl RecordVisitService {
    pub fn new(recorder: AnalyticsRecorder) -> Self {
        Self {
            recorder: Arc::new(Mutex::new(recorder)),
        }
    }
}

#[async_trait]
impl RecordVisitUseCase for RecordVisitService {
    async fn execute(&self, command: RecordVisitCommand) -> Result<VisitRecord, RecordVisitError> {
        let page = command.page.trim();
        if !page.starts_with('/') {
            return Err(RecordVisitError::InvalidPage(command.page));
        }

        let mut ctx = NavigationContext::new(page).with_user_agent(command.user_agent);
        ctx.referrer = command.referrer;
        let session_id = command
            .session_id
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        // Reload, append and write must not interleave between requests.
        // The file I/O runs on the blocking pool.
        let recorder = Arc::clone(&self.recorder);
        tokio::task::spawn_blocking(move || {
            let mut recorder = recorder.lock().unwrap_or_else(PoisonError::into_inner);
            recorder.record_for_session(&ctx, &session_id, Utc::now())
        })
        .await
        .map_err(|e| RecordVisitError::Storage(e.to_string()))?
        .map_err(|e| RecordVisitError::Storage(e.to_string()))
    }
}
