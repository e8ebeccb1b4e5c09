// Audit trail domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Risk classification attached to an audit entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A recorded action, appended to `audit:events`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct AuditEvent {
    pub id: Uuid,
    /// Who performed the action ("usr-demo", "system")
    pub actor: String,
    /// What happened ("alert.status_changed", "init.seeded")
    pub action: String,
    /// What it happened to ("alert-003", "projects:current")
    pub resource: String,
    pub risk_level: RiskLevel,
    pub created_at: DateTime<Utc>,
}
