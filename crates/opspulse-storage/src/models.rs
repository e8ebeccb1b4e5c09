// Database models (internal, distinct from the public DTOs)

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// One row of the kv_entries table
#[derive(Debug, Clone, FromRow)]
pub struct KvEntryRow {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}
