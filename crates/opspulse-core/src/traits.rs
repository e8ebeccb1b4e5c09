// Store abstraction for dashboard records
//
// The trait allows the route handlers to be used with different backends:
// - Postgres implementation for deployment (opspulse-storage)
// - In-memory implementation for tests and examples (memory module)
//
// Records are flat JSON values under string keys; last write wins, nothing
// is ever deleted.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

/// A raw stored record with its last-write timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct StoredValue {
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Trait for reading and writing flat dashboard records
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the record stored under `key`
    async fn get(&self, key: &str) -> Result<Option<StoredValue>>;

    /// Overwrite the record stored under `key`
    async fn put(&self, key: &str, value: serde_json::Value) -> Result<()>;
}

/// Fetch and decode the record under `key`
///
/// A record that no longer decodes as `T` is treated as absent, so the
/// seed-if-empty read path overwrites it on the next write.
pub async fn get_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Result<Option<T>> {
    let Some(stored) = store.get(key).await? else {
        return Ok(None);
    };

    match serde_json::from_value(stored.value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(e) => {
            tracing::warn!(key, "Discarding stored record with stale shape: {}", e);
            Ok(None)
        }
    }
}

/// Encode `value` and store it under `key`
pub async fn put_json<T: Serialize>(store: &dyn KvStore, key: &str, value: &T) -> Result<()> {
    store.put(key, serde_json::to_value(value)?).await
}
