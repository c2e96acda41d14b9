use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};

use crate::modules::content::application::ports::outgoing::{StorageAdapter, StorageError};
use crate::modules::content::domain::Content;

/// Version tag written around every stored blob.
pub const SCHEMA_VERSION: u64 = 1;

/// Defensive JSON layer over a [`StorageAdapter`].
///
/// Reads never fail: a missing key, an adapter error, unparseable JSON, a
/// foreign schema tag or a value of the wrong shape all come back as
/// `None`. Writes report failures so callers can keep their working copy.
#[derive(Clone)]
pub struct ContentStorage {
    adapter: Arc<dyn StorageAdapter>,
}

impl ContentStorage {
    pub fn new(adapter: Arc<dyn StorageAdapter>) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &Arc<dyn StorageAdapter> {
        &self.adapter
    }

    pub fn read<T: Content>(&self, key: &str) -> Option<T> {
        self.try_read(key).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "storage read failed, using defaults");
            None
        })
    }

    /// Like [`read`](Self::read), but an adapter failure is reported
    /// instead of being folded into `None`. Bad content is still `Ok(None)`.
    pub fn try_read<T: Content>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.adapter.get_item(key)? else {
            return Ok(None);
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored content is not valid JSON");
                return Ok(None);
            }
        };

        let Some(data) = unwrap_envelope(key, value) else {
            return Ok(None);
        };

        match serde_json::from_value::<T>(data) {
            Ok(content) if content.is_well_formed() => Ok(Some(content)),
            Ok(_) => {
                tracing::warn!(key, "stored content failed validation");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "stored content has an unexpected shape");
                Ok(None)
            }
        }
    }

    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let data = serde_json::to_value(value).map_err(|e| {
            tracing::warn!(key, error = %e, "failed to serialize content");
            StorageError::Serialization(e.to_string())
        })?;
        let blob = json!({ "schema": SCHEMA_VERSION, "data": data }).to_string();

        self.adapter.set_item(key, &blob).map_err(|e| {
            tracing::warn!(key, error = %e, "storage write failed");
            e
        })
    }

    /// Idempotent; a failed removal is logged and reported.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.adapter.remove_item(key).map_err(|e| {
            tracing::warn!(key, error = %e, "storage remove failed");
            e
        })
    }
}

/// Strips the `{"schema", "data"}` wrapper. Values without the wrapper are
/// legacy blobs and pass through untouched.
fn unwrap_envelope(key: &str, value: Value) -> Option<Value> {
    let Value::Object(mut map) = value else {
        return Some(value);
    };
    if !(map.contains_key("schema") && map.contains_key("data")) {
        return Some(Value::Object(map));
    }

    match map.get("schema").and_then(Value::as_u64) {
        Some(SCHEMA_VERSION) => map.remove("data"),
        other => {
            tracing::warn!(key, schema = ?other, "unsupported schema version, ignoring cache");
            None
        }
    }
}
