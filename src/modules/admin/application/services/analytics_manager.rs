use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::time::Instant;

use super::manager_screen::{ScreenContext, UnsavedChanges};
use crate::modules::admin::application::ports::outgoing::Confirmation;
use crate::modules::admin::domain::{Notice, NoticeBoard};
use crate::modules::analytics::application::services::AnalyticsRecorder;
use crate::modules::analytics::domain::{AnalyticsStats, VisitRecord};
use crate::modules::content::application::services::SaveError;
use crate::shared::events::{ChangeSignal, Watch};

pub const CLEAR_ANALYTICS_PROMPT: &str =
    "Are you sure you want to clear all analytics data? This action cannot be undone.";
/// Rows in the recent visits table.
pub const RECENT_VISITS: usize = 20;

/// Read-only statistics screen. Follows `AnalyticsUpdated` so visits
/// recorded elsewhere show up on the next look.
pub struct AnalyticsManager {
    recorder: AnalyticsRecorder,
    confirm: Arc<dyn Confirmation>,
    notices: NoticeBoard,
    changes: Watch,
}

impl AnalyticsManager {
    pub fn mount(ctx: &ScreenContext) -> Self {
        Self {
            recorder: AnalyticsRecorder::new(ctx.storage.clone(), ctx.notifier.clone()),
            confirm: Arc::clone(&ctx.confirm),
            notices: NoticeBoard::new(ctx.settings.notice_ttl),
            changes: ctx.notifier.watch(ChangeSignal::AnalyticsUpdated),
        }
    }

    fn sync(&mut self) {
        if self.changes.take() {
            self.recorder.refresh();
        }
    }

    /// Recomputed from the stored visit log on every call.
    pub fn stats_at(&mut self, now: DateTime<Utc>) -> AnalyticsStats {
        self.sync();
        self.recorder.stats_at(now)
    }

    pub fn recent_visits(&mut self) -> Vec<VisitRecord> {
        self.sync();
        self.recorder.recent_visits(RECENT_VISITS)
    }

    /// Returns `Ok(false)` when the user declines.
    pub fn clear(&mut self) -> Result<bool, SaveError> {
        if !self.confirm.confirm(CLEAR_ANALYTICS_PROMPT) {
            return Ok(false);
        }
        match self.recorder.clear() {
            Ok(()) => {
                self.notices.success("Analytics data cleared");
                Ok(true)
            }
            Err(e) => {
                self.notices.error(e.to_string());
                Err(e)
            }
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn tick(&mut self, now: Instant) {
        self.notices.tick(now);
    }
}

impl UnsavedChanges for AnalyticsManager {
    fn has_unsaved_changes(&self) -> bool {
        false
    }
}
