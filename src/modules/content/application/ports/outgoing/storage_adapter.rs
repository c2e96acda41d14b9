// storage_adapter.rs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage quota exceeded writing {key}: {requested} bytes requested, {available} available")]
    QuotaExceeded {
        key: String,
        requested: usize,
        available: usize,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Synchronous key/value persistence over string blobs.
///
/// Implementations return errors; the soft-failure policy lives one level
/// up in `ContentStorage`.
pub trait StorageAdapter: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
