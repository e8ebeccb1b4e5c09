// Diagnostics routes

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::{DiagnosticsService, ProbeResult};

/// App state for diagnostics routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DiagnosticsService>,
}

impl AppState {
    pub fn new(service: Arc<DiagnosticsService>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConnectivityResponse {
    /// "ok" when every probe passed, "degraded" otherwise
    pub status: String,
    pub probes: Vec<ProbeResult>,
    pub checked_at: DateTime<Utc>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/diagnostics/connectivity", get(connectivity))
        .with_state(state)
}

/// GET /v1/diagnostics/connectivity - Probe configured upstreams
#[utoipa::path(
    get,
    path = "/v1/diagnostics/connectivity",
    responses(
        (status = 200, description = "Probe results", body = ConnectivityResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "diagnostics"
)]
pub async fn connectivity(State(state): State<AppState>) -> Json<ConnectivityResponse> {
    let probes = state.service.run().await;

    let status = if probes.iter().any(|p| p.status != "ok") {
        "degraded"
    } else {
        "ok"
    };

    Json(ConnectivityResponse {
        status: status.to_string(),
        probes,
        checked_at: Utc::now(),
    })
}
