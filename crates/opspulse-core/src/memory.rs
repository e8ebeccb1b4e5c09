// In-memory store for examples and testing
//
// Keeps all records in memory, making it perfect for:
// - Route tests that should not need a database
// - Running the API locally without Postgres

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::traits::{KvStore, StoredValue};

/// In-memory key-value store
///
/// Records live in a HashMap keyed by the store key.
#[derive(Debug, Default, Clone)]
pub struct InMemoryKvStore {
    entries: Arc<RwLock<HashMap<String, StoredValue>>>,
}

impl InMemoryKvStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get all stored keys
    pub async fn keys(&self) -> Vec<String> {
        self.entries.read().await.keys().cloned().collect()
    }

    /// Clear all records
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Pre-populate a record (useful for testing)
    pub async fn seed(&self, key: impl Into<String>, value: serde_json::Value) {
        self.entries.write().await.insert(
            key.into(),
            StoredValue {
                value,
                updated_at: Utc::now(),
            },
        );
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: serde_json::Value) -> Result<()> {
        self.entries.write().await.insert(
            key.to_string(),
            StoredValue {
                value,
                updated_at: Utc::now(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{get_json, put_json};
    use serde_json::json;

    #[tokio::test]
    async fn test_roundtrip() {
        let store = InMemoryKvStore::new();

        store.put("k", json!({"n": 1})).await.unwrap();
        let stored = store.get("k").await.unwrap().unwrap();
        assert_eq!(stored.value, json!({"n": 1}));

        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_json_treats_stale_shape_as_absent() {
        let store = InMemoryKvStore::new();
        store.seed("k", json!("not an object")).await;

        let decoded: Option<HashMap<String, u32>> = get_json(&store, "k").await.unwrap();
        assert!(decoded.is_none());
    }

    #[tokio::test]
    async fn test_put_json_overwrites() {
        let store = InMemoryKvStore::new();

        put_json(&store, "k", &vec![1, 2, 3]).await.unwrap();
        put_json(&store, "k", &vec![4]).await.unwrap();

        let decoded: Option<Vec<u32>> = get_json(&store, "k").await.unwrap();
        assert_eq!(decoded, Some(vec![4]));
    }
}
