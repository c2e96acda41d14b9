use std::time::Duration;

use tokio::time::Instant;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Local buffer for one text field.
///
/// Keystrokes only touch the buffer. The value is released for the store
/// once typing pauses for the debounce interval, or immediately on blur,
/// and only if it differs from what was last released.
#[derive(Debug, Clone)]
pub struct BufferedInput {
    value: String,
    committed: String,
    deadline: Option<Instant>,
    debounce: Duration,
}

impl BufferedInput {
    pub fn new(initial: &str) -> Self {
        Self::with_debounce(initial, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(initial: &str, debounce: Duration) -> Self {
        Self {
            value: initial.to_string(),
            committed: initial.to_string(),
            deadline: None,
            debounce,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Records a keystroke and restarts the debounce window.
    pub fn input(&mut self, value: &str, now: Instant) {
        self.value = value.to_string();
        self.deadline = Some(now + self.debounce);
    }

    /// Releases the buffered value once the debounce window has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.release(),
            _ => None,
        }
    }

    pub fn blur(&mut self) -> Option<String> {
        self.release()
    }

    /// Replaces the buffer after the store changed underneath it, e.g. on
    /// discard. Drops any pending commit.
    pub fn reset(&mut self, value: &str) {
        self.value = value.to_string();
        self.committed = value.to_string();
        self.deadline = None;
    }

    fn release(&mut self) -> Option<String> {
        self.deadline = None;
        if self.value == self.committed {
            return None;
        }
        self.committed = self.value.clone();
        Some(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::admin::application::ports::outgoing::MockConfirmation;
    use crate::modules::admin::application::services::{PersonalInfoManager, ScreenSettings};
    use crate::modules::admin::domain::PersonalField;
    use crate::modules::admin::application::services::UnsavedChanges;
    use crate::tests::support::fixtures::screen_context;

    #[tokio::test(start_paused = true)]
    async fn test_commits_once_typing_pauses() {
        let mut input = BufferedInput::new("Lisbon");

        for text in ["P", "Po", "Por", "Porto"] {
            input.input(text, Instant::now());
            tokio::time::advance(Duration::from_millis(100)).await;
            assert_eq!(input.poll(Instant::now()), None);
        }

        tokio::time::advance(Duration::from_millis(200)).await;
        assert_eq!(input.poll(Instant::now()).as_deref(), Some("Porto"));
        assert!(!input.is_pending());
        assert_eq!(input.poll(Instant::now()), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blur_commits_immediately_and_skips_unchanged() {
        let mut input = BufferedInput::new("Lisbon");
        assert_eq!(input.blur(), None);

        input.input("Porto", Instant::now());
        assert_eq!(input.blur().as_deref(), Some("Porto"));

        // Typed back to the committed value: nothing to release.
        input.input("Porto", Instant::now());
        tokio::time::advance(DEFAULT_DEBOUNCE).await;
        assert_eq!(input.poll(Instant::now()), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_sees_one_write_per_pause() {
        let (_, ctx) = screen_context(MockConfirmation::new(), ScreenSettings::instant());
        let mut manager = PersonalInfoManager::mount(&ctx);
        let mut input = BufferedInput::new(manager.field(PersonalField::Phone));

        input.input("+351", Instant::now());
        input.input("+351 900", Instant::now());
        assert!(!manager.has_unsaved_changes());

        tokio::time::advance(DEFAULT_DEBOUNCE).await;
        if let Some(value) = input.poll(Instant::now()) {
            manager.set_field(PersonalField::Phone, &value);
        }
        assert_eq!(manager.field(PersonalField::Phone), "+351 900");
        assert!(manager.has_unsaved_changes());

        input.reset(manager.field(PersonalField::Phone));
        assert!(!input.is_pending());
    }
}
