// Database-backed KvStore implementation
//
// Implements the core KvStore trait so the API routes work against
// Postgres in deployment and the in-memory store under test.

use async_trait::async_trait;
use opspulse_core::{DashboardError, KvStore, Result, StoredValue};

use crate::repositories::Database;

/// Postgres-backed key-value store
#[derive(Clone)]
pub struct PgKvStore {
    db: Database,
}

impl PgKvStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KvStore for PgKvStore {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>> {
        let row = self
            .db
            .get_entry(key)
            .await
            .map_err(|e| DashboardError::store(e.to_string()))?;

        Ok(row.map(|r| StoredValue {
            value: r.value,
            updated_at: r.updated_at,
        }))
    }

    async fn put(&self, key: &str, value: serde_json::Value) -> Result<()> {
        self.db
            .put_entry(key, &value)
            .await
            .map_err(|e| DashboardError::store(e.to_string()))?;

        Ok(())
    }
}
