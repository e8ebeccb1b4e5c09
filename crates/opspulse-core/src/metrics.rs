// Dashboard metrics domain types
//
// One flat numeric snapshot backs the dashboard header cards. Values are
// synthesized, not measured; see the synth module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Flat numeric snapshot for the dashboard header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DashboardMetrics {
    /// Overall infrastructure health percentage, always in [95, 100]
    pub system_health: f64,
    /// Month-to-date cloud spend in USD
    pub monthly_spend: f64,
    /// Identified monthly savings in USD
    pub cost_savings: f64,
    /// Month-to-date carbon footprint in metric tons CO2e
    pub carbon_tons: f64,
    /// Rolling 30-day uptime percentage
    pub uptime_percent: f64,
    /// Count of currently active alerts
    pub active_alerts: u32,
    /// When this snapshot was synthesized
    pub generated_at: DateTime<Utc>,
}
