// User profile domain types
//
// Profiles are the only per-entity records in the store; everything else
// is a single shared collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Dashboard role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Operator,
    Viewer,
}

/// Per-user display preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UserPreferences {
    /// "light" or "dark"
    pub theme: String,
    pub email_alerts: bool,
    /// "daily", "weekly" or "off"
    pub digest_frequency: String,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            email_alerts: true,
            digest_frequency: "daily".to_string(),
        }
    }
}

/// A stored user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
}
