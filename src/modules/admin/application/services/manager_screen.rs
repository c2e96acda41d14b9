use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::modules::admin::application::ports::outgoing::Confirmation;
use crate::modules::admin::domain::{Notice, NoticeBoard, DEFAULT_NOTICE_TTL};
use crate::modules::content::application::services::{
    ContentStorage, ContentStore, SaveError, DEFAULT_SAVE_DELAY,
};
use crate::modules::content::domain::{Content, ContentDomain, PortfolioContent};
use crate::shared::events::ChangeNotifier;

pub const SAVE_FAILED_MESSAGE: &str = "Error saving data. Please try again.";
pub const DISCARD_PROMPT: &str = "Are you sure you want to reset all changes?";

/// Read by the dashboard to decide whether leaving needs confirmation.
pub trait UnsavedChanges {
    fn has_unsaved_changes(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSettings {
    pub save_delay: Duration,
    pub notice_ttl: Duration,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            save_delay: DEFAULT_SAVE_DELAY,
            notice_ttl: DEFAULT_NOTICE_TTL,
        }
    }
}

impl ScreenSettings {
    /// No simulated latency. Used for scripted edits and tests.
    pub fn instant() -> Self {
        Self {
            save_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Everything a screen needs to mount.
#[derive(Clone)]
pub struct ScreenContext {
    pub storage: ContentStorage,
    pub notifier: ChangeNotifier,
    pub confirm: Arc<dyn Confirmation>,
    pub defaults: Arc<PortfolioContent>,
    pub settings: ScreenSettings,
}

impl ScreenContext {
    pub fn store<T: Content>(&self, domain: ContentDomain, defaults: T) -> ContentStore<T> {
        ContentStore::initialize(domain, defaults, self.storage.clone(), self.notifier.clone())
            .with_save_delay(self.settings.save_delay)
    }
}

/// Shared "save in flight" flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct SaveProgress(Arc<AtomicBool>);

impl SaveProgress {
    pub fn is_saving(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Claims the flag, or returns `None` when a save is already running.
    /// The flag is released when the guard drops.
    fn begin(&self) -> Option<SaveGuard> {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| SaveGuard(Arc::clone(&self.0)))
    }
}

struct SaveGuard(Arc<AtomicBool>);

impl Drop for SaveGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved,
    /// Nothing to save, or another save is still running.
    Unchanged,
    Failed(SaveError),
}

/// The editing shell every content screen shares: one store, a save
/// button, a discard button and a notice banner.
pub struct ManagerScreen<T: Content> {
    store: ContentStore<T>,
    progress: SaveProgress,
    notices: NoticeBoard,
    confirm: Arc<dyn Confirmation>,
    saved_message: String,
}

impl<T: Content> ManagerScreen<T> {
    pub fn new(
        store: ContentStore<T>,
        confirm: Arc<dyn Confirmation>,
        notice_ttl: Duration,
        saved_message: &str,
    ) -> Self {
        Self {
            store,
            progress: SaveProgress::default(),
            notices: NoticeBoard::new(notice_ttl),
            confirm,
            saved_message: saved_message.to_string(),
        }
    }

    pub fn mount(ctx: &ScreenContext, domain: ContentDomain, defaults: T, saved_message: &str) -> Self {
        Self::new(
            ctx.store(domain, defaults),
            Arc::clone(&ctx.confirm),
            ctx.settings.notice_ttl,
            saved_message,
        )
    }

    pub fn store(&self) -> &ContentStore<T> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ContentStore<T> {
        &mut self.store
    }

    pub fn current(&self) -> &T {
        self.store.current()
    }

    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn progress(&self) -> SaveProgress {
        self.progress.clone()
    }

    pub fn can_save(&self) -> bool {
        self.store.is_dirty() && !self.progress.is_saving()
    }

    pub fn confirm(&self, prompt: &str) -> bool {
        self.confirm.confirm(prompt)
    }

    pub async fn save(&mut self) -> SaveOutcome {
        if !self.store.is_dirty() {
            return SaveOutcome::Unchanged;
        }
        let Some(_guard) = self.progress.begin() else {
            return SaveOutcome::Unchanged;
        };

        match self.store.save().await {
            Ok(()) => {
                self.notices.success(self.saved_message.clone());
                SaveOutcome::Saved
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed, keeping working copy");
                self.notices.error(SAVE_FAILED_MESSAGE);
                SaveOutcome::Failed(e)
            }
        }
    }

    /// Reverts to the last saved state. Asks first when there is anything
    /// to lose; returns `false` if the user declined.
    pub fn discard(&mut self) -> bool {
        if !self.store.is_dirty() {
            return true;
        }
        if !self.confirm.confirm(DISCARD_PROMPT) {
            return false;
        }
        self.store.discard();
        true
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub fn tick(&mut self, now: Instant) {
        self.notices.tick(now);
    }
}

impl<T: Content> UnsavedChanges for ManagerScreen<T> {
    fn has_unsaved_changes(&self) -> bool {
        self.store.is_dirty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::ports::outgoing::MockConfirmation;
    use crate::modules::admin::domain::NoticeKind;
    use crate::modules::content::adapter::outgoing::MemoryStorage;
    use crate::modules::content::application::ports::outgoing::StorageError;
    use crate::modules::content::domain::EducationRecord;
    use crate::tests::support::fixtures::screen_context;

    fn education_screen(
        ctx: &ScreenContext,
    ) -> ManagerScreen<EducationRecord> {
        ManagerScreen::mount(
            ctx,
            ContentDomain::Education,
            ctx.defaults.education.clone(),
            "Education data saved successfully!",
        )
    }

    fn edit(screen: &mut ManagerScreen<EducationRecord>) {
        screen.store_mut().modify(|e| e.gpa = "4.0".to_string());
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_is_disabled_while_clean_and_while_in_flight() {
        let (_, ctx) = screen_context(MockConfirmation::new(), ScreenSettings::default());
        let mut screen = education_screen(&ctx);
        assert!(!screen.can_save());

        edit(&mut screen);
        assert!(screen.can_save());

        let progress = screen.progress();
        let (outcome, saving_midway) = tokio::join!(screen.save(), async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            progress.is_saving()
        });

        assert!(saving_midway);
        assert_eq!(outcome, SaveOutcome::Saved);
        assert!(!screen.progress().is_saving());
        assert!(!screen.can_save());
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_notice_shows_for_three_seconds() {
        let (_, ctx) = screen_context(MockConfirmation::new(), ScreenSettings::default());
        let mut screen = education_screen(&ctx);
        edit(&mut screen);

        screen.save().await;
        let notice = screen.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "Education data saved successfully!");

        tokio::time::advance(Duration::from_secs(3)).await;
        screen.tick(Instant::now());
        assert!(screen.notice().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_save_keeps_edits_and_shows_error() {
        let (memory, ctx): (MemoryStorage, _) =
            screen_context(MockConfirmation::new(), ScreenSettings::default());
        let mut screen = education_screen(&ctx);
        edit(&mut screen);
        memory.set_disabled(true);

        let outcome = screen.save().await;

        match outcome {
            SaveOutcome::Failed(SaveError::Storage { source, .. }) => {
                assert!(matches!(source, StorageError::Unavailable(_)))
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(screen.is_dirty());
        assert_eq!(screen.current().gpa, "4.0");
        assert_eq!(screen.notice().unwrap().kind, NoticeKind::Error);
        assert!(screen.can_save());
    }

    #[tokio::test]
    async fn test_save_when_clean_is_unchanged() {
        let (_, ctx) = screen_context(MockConfirmation::new(), ScreenSettings::default());
        let mut screen = education_screen(&ctx);

        assert_eq!(screen.save().await, SaveOutcome::Unchanged);
        assert!(screen.notice().is_none());
    }

    #[test]
    fn test_discard_asks_only_when_dirty() {
        let mut confirm = MockConfirmation::new();
        confirm
            .expect_confirm()
            .withf(|prompt| prompt == DISCARD_PROMPT)
            .times(1)
            .return_const(false);
        let (_, ctx) = screen_context(confirm, ScreenSettings::default());
        let mut screen = education_screen(&ctx);

        // Clean: no prompt.
        assert!(screen.discard());

        edit(&mut screen);
        assert!(!screen.discard());
        assert_eq!(screen.current().gpa, "4.0");
        assert!(screen.has_unsaved_changes());
    }

    #[test]
    fn test_confirmed_discard_restores_saved_state() {
        let mut confirm = MockConfirmation::new();
        confirm.expect_confirm().return_const(true);
        let (_, ctx) = screen_context(confirm, ScreenSettings::default());
        let mut screen = education_screen(&ctx);
        let before = screen.current().clone();

        edit(&mut screen);
        assert!(screen.discard());

        assert_eq!(screen.current(), &before);
        assert!(!screen.has_unsaved_changes());
    }
}
