use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::modules::analytics::domain::{
    compute_stats, AnalyticsStats, NavigationContext, VisitRecord,
};
use crate::modules::content::application::services::{ContentStorage, ContentStore, SaveError};
use crate::modules::content::domain::ContentDomain;
use crate::shared::events::ChangeNotifier;

/// Oldest visits are evicted beyond this many.
pub const MAX_VISITS: usize = 1000;

/// Append-only visit log. Every record is written straight away; there is
/// no draft state for telemetry.
pub struct AnalyticsRecorder {
    store: ContentStore<Vec<VisitRecord>>,
    session_id: String,
}

impl AnalyticsRecorder {
    /// One recorder per tab: the session id is generated here and reused
    /// for every visit it records.
    pub fn new(storage: ContentStorage, notifier: ChangeNotifier) -> Self {
        let store =
            ContentStore::initialize(ContentDomain::Analytics, Vec::new(), storage, notifier)
                .with_save_delay(Duration::ZERO);

        Self {
            store,
            session_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn record_visit(&mut self, ctx: &NavigationContext) -> Result<VisitRecord, SaveError> {
        self.record_visit_at(ctx, Utc::now())
    }

    pub fn record_visit_at(
        &mut self,
        ctx: &NavigationContext,
        now: DateTime<Utc>,
    ) -> Result<VisitRecord, SaveError> {
        let session_id = self.session_id.clone();
        self.record_for_session(ctx, &session_id, now)
    }

    /// Records under a caller-supplied session id (visits reported over
    /// HTTP carry the browser's own id).
    pub fn record_for_session(
        &mut self,
        ctx: &NavigationContext,
        session_id: &str,
        now: DateTime<Utc>,
    ) -> Result<VisitRecord, SaveError> {
        // Other tabs append to the same key.
        self.store.reload();

        let visit = VisitRecord::new(ctx, session_id, now);
        self.store.modify(|visits| {
            visits.push(visit.clone());
            if visits.len() > MAX_VISITS {
                let excess = visits.len() - MAX_VISITS;
                visits.drain(..excess);
            }
        });

        if let Err(e) = self.store.save_now() {
            self.store.discard();
            return Err(e);
        }

        tracing::debug!(page = %visit.page, session = %visit.session_id, "visit recorded");
        Ok(visit)
    }

    /// Picks up visits written by other recorders since the last call.
    pub fn refresh(&mut self) {
        self.store.reload();
    }

    /// Oldest first.
    pub fn visits(&self) -> &[VisitRecord] {
        self.store.current()
    }

    /// Newest first.
    pub fn recent_visits(&self, limit: usize) -> Vec<VisitRecord> {
        let mut visits = self.store.current().clone();
        visits.sort_by(|a, b| b.timestamp_ms.cmp(&a.timestamp_ms));
        visits.truncate(limit);
        visits
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> AnalyticsStats {
        compute_stats(self.store.current(), now)
    }

    pub fn stats(&self) -> AnalyticsStats {
        self.stats_at(Utc::now())
    }

    pub fn clear(&mut self) -> Result<(), SaveError> {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::adapter::outgoing::MemoryStorage;
    use crate::shared::events::ChangeSignal;
    use chrono::{Duration as ChronoDuration, TimeZone};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn setup() -> (MemoryStorage, ContentStorage, ChangeNotifier) {
        let memory = MemoryStorage::new();
        let storage = ContentStorage::new(Arc::new(memory.clone()));
        (memory, storage, ChangeNotifier::new())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 20, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_record_visit_reuses_the_tab_session_and_publishes() {
        let (_, storage, notifier) = setup();
        let published = Arc::new(AtomicUsize::new(0));
        let _sub = {
            let published = Arc::clone(&published);
            notifier.subscribe(ChangeSignal::AnalyticsUpdated, move || {
                published.fetch_add(1, Ordering::SeqCst);
            })
        };

        let mut recorder = AnalyticsRecorder::new(storage.clone(), notifier);
        let first = recorder
            .record_visit_at(&NavigationContext::new("/"), now())
            .unwrap();
        let second = recorder
            .record_visit_at(&NavigationContext::new("/projects"), now())
            .unwrap();

        assert_eq!(first.session_id, recorder.session_id());
        assert_eq!(second.session_id, recorder.session_id());
        assert_ne!(first.id, second.id);
        assert_eq!(published.load(Ordering::SeqCst), 2);

        let stored: Vec<VisitRecord> = storage.read("portfolio_analytics").unwrap();
        assert_eq!(stored, vec![first, second]);
    }

    #[test]
    fn test_log_is_capped_keeping_the_newest() {
        let (_, storage, notifier) = setup();
        let mut seed = AnalyticsRecorder::new(storage.clone(), notifier.clone());
        let template = seed
            .record_visit_at(&NavigationContext::new("/seed"), now())
            .unwrap();
        let full: Vec<VisitRecord> = (0..MAX_VISITS)
            .map(|i| VisitRecord {
                id: format!("v{}", i),
                ..template.clone()
            })
            .collect();
        storage.write("portfolio_analytics", &full).unwrap();

        let mut recorder = AnalyticsRecorder::new(storage.clone(), notifier);
        let newest = recorder
            .record_visit_at(&NavigationContext::new("/latest"), now())
            .unwrap();

        let visits = recorder.visits();
        assert_eq!(visits.len(), MAX_VISITS);
        assert_eq!(visits[0].id, "v1");
        assert_eq!(visits.last(), Some(&newest));
    }

    #[test]
    fn test_recorders_in_two_tabs_append_to_one_log() {
        let (_, storage, notifier) = setup();
        let mut tab_a = AnalyticsRecorder::new(storage.clone(), notifier.clone());
        let mut tab_b = AnalyticsRecorder::new(storage.clone(), notifier);

        tab_a.record_visit_at(&NavigationContext::new("/"), now()).unwrap();
        tab_b.record_visit_at(&NavigationContext::new("/"), now()).unwrap();
        tab_a.refresh();

        let stats = tab_a.stats_at(now());
        assert_eq!(stats.total_visits, 2);
        assert_eq!(stats.unique_visitors, 2);
    }

    #[test]
    fn test_failed_write_leaves_the_log_unchanged() {
        let (memory, storage, notifier) = setup();
        let mut recorder = AnalyticsRecorder::new(storage, notifier);
        recorder.record_visit_at(&NavigationContext::new("/"), now()).unwrap();

        memory.set_disabled(true);
        assert!(recorder
            .record_visit_at(&NavigationContext::new("/lost"), now())
            .is_err());
        // The failed visit is not kept in memory either.
        assert_eq!(recorder.visits().len(), 1);
        assert_eq!(recorder.visits()[0].page, "/");
        assert!(recorder
            .record_for_session(&NavigationContext::new("/lost"), "other-tab", now())
            .is_err());
        assert_eq!(recorder.visits().len(), 1);
    }

    #[test]
    fn test_recent_visits_are_newest_first_and_clear_empties_the_log() {
        let (_, storage, notifier) = setup();
        let mut recorder = AnalyticsRecorder::new(storage.clone(), notifier);
        for minutes in [0, 10, 5] {
            recorder
                .record_visit_at(
                    &NavigationContext::new(format!("/{}", minutes)),
                    now() + ChronoDuration::minutes(minutes),
                )
                .unwrap();
        }

        let pages: Vec<String> = recorder.recent_visits(2).into_iter().map(|v| v.page).collect();
        assert_eq!(pages, vec!["/10", "/5"]);

        recorder.clear().unwrap();
        assert!(recorder.visits().is_empty());
        assert_eq!(storage.read::<Vec<VisitRecord>>("portfolio_analytics"), None);
    }
}
