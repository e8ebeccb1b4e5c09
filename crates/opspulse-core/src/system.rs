// System bookkeeping types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Seed data version written by init; stays at this value across repeated runs
pub const INIT_VERSION: &str = "1.0.0";

/// Marker stored under `system:initialized` after the first seeding run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct InitMarker {
    pub version: String,
    pub initialized_at: DateTime<Utc>,
}
