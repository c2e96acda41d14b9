use std::sync::Arc;

use crate::modules::admin::application::ports::outgoing::Confirmation;
use crate::modules::admin::application::services::{ScreenContext, ScreenSettings};
use crate::modules::content::adapter::outgoing::MemoryStorage;
use crate::modules::content::application::services::ContentStorage;
use crate::modules::content::domain::PortfolioContent;
use crate::shared::events::ChangeNotifier;

/// Fresh in-memory storage and a screen context over it. The returned
/// `MemoryStorage` shares entries with the context, so tests can corrupt or
/// inspect raw blobs.
pub fn screen_context(
    confirm: impl Confirmation + 'static,
    settings: ScreenSettings,
) -> (MemoryStorage, ScreenContext) {
    let memory = MemoryStorage::new();
    let ctx = ScreenContext {
        storage: ContentStorage::new(Arc::new(memory.clone())),
        notifier: ChangeNotifier::new(),
        confirm: Arc::new(confirm),
        defaults: Arc::new(PortfolioContent::builtin()),
        settings,
    };
    (memory, ctx)
}

pub fn memory_storage() -> (MemoryStorage, ContentStorage) {
    let memory = MemoryStorage::new();
    let storage = ContentStorage::new(Arc::new(memory.clone()));
    (memory, storage)
}
