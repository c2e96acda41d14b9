use std::time::Duration;

use crate::modules::content::application::ports::outgoing::StorageError;
use crate::modules::content::application::services::ContentStorage;
use crate::modules::content::domain::{Content, ContentDomain};
use crate::shared::events::ChangeNotifier;

pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveError {
    #[error("Failed to persist {domain}: {source}")]
    Storage {
        domain: ContentDomain,
        #[source]
        source: StorageError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListEditError {
    #[error("Index {index} is out of bounds for a list of {len} entries")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Working copy plus original snapshot of one content domain.
///
/// Mutations only ever touch `current`. `save` promotes it to `original`
/// and tells every subscriber of the domain's signal to re-read storage;
/// `discard` goes the other way with no I/O.
pub struct ContentStore<T: Content> {
    domain: ContentDomain,
    storage: ContentStorage,
    notifier: ChangeNotifier,
    save_delay: Duration,
    defaults: T,
    current: T,
    original: T,
}

impl<T: Content> ContentStore<T> {
    /// Seeds from cached content when it is present and well formed,
    /// otherwise from `defaults`.
    pub fn initialize(
        domain: ContentDomain,
        defaults: T,
        storage: ContentStorage,
        notifier: ChangeNotifier,
    ) -> Self {
        let initial = storage
            .read::<T>(domain.storage_key())
            .unwrap_or_else(|| defaults.clone());

        Self {
            domain,
            storage,
            notifier,
            save_delay: DEFAULT_SAVE_DELAY,
            defaults,
            current: initial.clone(),
            original: initial,
        }
    }

    pub fn with_save_delay(mut self, delay: Duration) -> Self {
        self.save_delay = delay;
        self
    }

    pub fn domain(&self) -> ContentDomain {
        self.domain
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn original(&self) -> &T {
        &self.original
    }

    pub fn defaults(&self) -> &T {
        &self.defaults
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.original
    }

    /// Field-level edit of the working copy.
    pub fn modify<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut T),
    {
        edit(&mut self.current);
    }

    pub fn replace(&mut self, value: T) {
        self.current = value;
    }

    /// Waits the simulated save latency, then persists.
    pub async fn save(&mut self) -> Result<(), SaveError> {
        if !self.save_delay.is_zero() {
            tokio::time::sleep(self.save_delay).await;
        }
        self.save_now()
    }

    /// Persists without the delay. Listeners have run by the time this
    /// returns.
    pub fn save_now(&mut self) -> Result<(), SaveError> {
        let key = self.domain.storage_key();
        self.storage
            .write(key, &self.current)
            .map_err(|source| SaveError::Storage {
                domain: self.domain,
                source,
            })?;

        self.original = self.current.clone();
        let notified = self.notifier.publish(self.domain.signal());
        tracing::info!(domain = %self.domain, listeners = notified, "content saved");
        Ok(())
    }

    pub fn discard(&mut self) {
        self.current = self.original.clone();
    }

    /// Re-reads storage into both copies, dropping unsaved edits. Used by
    /// autosaving domains that share their key with other writers. When
    /// storage cannot be read both copies are left as they are.
    pub fn reload(&mut self) {
        let key = self.domain.storage_key();
        match self.storage.try_read::<T>(key) {
            Ok(fresh) => {
                let fresh = fresh.unwrap_or_else(|| self.defaults.clone());
                self.current = fresh.clone();
                self.original = fresh;
            }
            Err(e) => {
                tracing::warn!(
                    domain = %self.domain,
                    error = %e,
                    "reload skipped, keeping in-memory copy"
                );
            }
        }
    }

    /// Removes the stored blob and resets both copies to the defaults.
    pub fn clear(&mut self) -> Result<(), SaveError> {
        self.storage
            .remove(self.domain.storage_key())
            .map_err(|source| SaveError::Storage {
                domain: self.domain,
                source,
            })?;

        self.current = self.defaults.clone();
        self.original = self.defaults.clone();
        self.notifier.publish(self.domain.signal());
        tracing::info!(domain = %self.domain, "content cleared");
        Ok(())
    }
}

impl<I: Content> ContentStore<Vec<I>> {
    pub fn replace_list(&mut self, items: Vec<I>) {
        self.current = items;
    }

    /// `index == len` appends.
    pub fn insert_at(&mut self, index: usize, item: I) -> Result<(), ListEditError> {
        let len = self.current.len();
        if index > len {
            return Err(ListEditError::IndexOutOfBounds { index, len });
        }
        self.current.insert(index, item);
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<I, ListEditError> {
        let len = self.current.len();
        if index >= len {
            return Err(ListEditError::IndexOutOfBounds { index, len });
        }
        Ok(self.current.remove(index))
    }

    pub fn update_at(&mut self, index: usize, item: I) -> Result<(), ListEditError> {
        let len = self.current.len();
        match self.current.get_mut(index) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(ListEditError::IndexOutOfBounds { index, len }),
        }
    }
}
