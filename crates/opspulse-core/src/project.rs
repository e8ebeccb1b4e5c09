// Project domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Delivery status shown on the project card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    OnTrack,
    AtRisk,
    Behind,
}

/// An initiative tracked on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    /// Completion percentage, 0-100
    pub progress: u8,
    /// Approved budget in USD
    pub budget: f64,
    /// Spend to date in USD
    pub spent: f64,
    pub team_size: u32,
    pub due_date: DateTime<Utc>,
}
