use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::modules::content::application::ports::outgoing::{StorageAdapter, StorageError};

/// In-process storage with the failure modes of browser storage: a byte
/// quota and a switch that makes every call fail as if storage were
/// disabled. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
    disabled: Arc<AtomicBool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys and values together may not exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota_bytes: Some(bytes),
            ..Self::default()
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_enabled(&self) -> Result<(), StorageError> {
        if self.disabled.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "storage is disabled for this origin".to_string(),
            ));
        }
        Ok(())
    }
}

impl StorageAdapter for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_enabled()?;
        Ok(self.entries().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_enabled()?;
        let mut entries = self.entries();

        if let Some(quota) = self.quota_bytes {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let requested = key.len() + value.len();
            if used + requested > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    requested,
                    available: quota.saturating_sub(used),
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_enabled()?;
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other_tab = storage.clone();

        storage.set_item("k", "v").unwrap();

        assert_eq!(other_tab.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(other_tab.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();

        assert!(storage.remove_item("k").is_ok());
        assert!(storage.remove_item("k").is_ok());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let storage = MemoryStorage::with_quota(10);
        storage.set_item("k", "12345").unwrap();
        // Replacing the same key frees its previous bytes first.
        storage.set_item("k", "123456789").unwrap();

        let err = storage.set_item("k2", "x").unwrap_err();
        match err {
            StorageError::QuotaExceeded {
                key,
                requested,
                available,
            } => {
                assert_eq!(key, "k2");
                assert_eq!(requested, 3);
                assert_eq!(available, 0);
            }
            other => panic!("expected quota error, got {:?}", other),
        }
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("123456789"));
    }

    #[test]
    fn test_disabled_storage_fails_every_call() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();
        storage.set_disabled(true);

        assert!(matches!(storage.get_item("k"), Err(StorageError::Unavailable(_))));
        assert!(matches!(storage.set_item("k", "w"), Err(StorageError::Unavailable(_))));
        assert!(matches!(storage.remove_item("k"), Err(StorageError::Unavailable(_))));

        storage.set_disabled(false);
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
