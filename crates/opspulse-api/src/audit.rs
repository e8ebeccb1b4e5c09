// Audit trail routes

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use opspulse_core::{seeds, AuditEvent, RiskLevel};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::common::SuccessResponse;
use crate::services::AuditService;

/// App state for audit routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<AuditService>,
}

impl AppState {
    pub fn new(service: Arc<AuditService>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditEventsResponse {
    pub events: Vec<AuditEvent>,
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RecordAuditEventRequest {
    pub actor: String,
    pub action: String,
    pub resource: String,
    pub risk_level: RiskLevel,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/audit/events", get(list_events).post(record_event))
        .with_state(state)
}

/// GET /v1/audit/events - Audit trail, newest first
#[utoipa::path(
    get,
    path = "/v1/audit/events",
    responses(
        (status = 200, description = "Audit trail", body = AuditEventsResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "audit"
)]
pub async fn list_events(State(state): State<AppState>) -> Json<AuditEventsResponse> {
    let events = match state.service.events().await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!("Failed to load audit events: {}", e);
            seeds::audit_seed(Utc::now())
        }
    };

    let count = events.len();
    Json(AuditEventsResponse { events, count })
}

/// POST /v1/audit/events - Record a new entry
#[utoipa::path(
    post,
    path = "/v1/audit/events",
    request_body = RecordAuditEventRequest,
    responses(
        (status = 200, description = "Acknowledged", body = SuccessResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "audit"
)]
pub async fn record_event(
    State(state): State<AppState>,
    Json(req): Json<RecordAuditEventRequest>,
) -> Json<SuccessResponse> {
    if let Err(e) = state
        .service
        .record(req.actor, req.action, req.resource, req.risk_level)
        .await
    {
        tracing::error!("Failed to record audit event: {}", e);
    }

    Json(SuccessResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use opspulse_core::InMemoryKvStore;
    use serde_json::json;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let store = Arc::new(InMemoryKvStore::new());
        routes(AppState::new(Arc::new(AuditService::new(store))))
    }

    async fn list(app: Router) -> AuditEventsResponse {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/audit/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_cold_store_seeds_the_trail() {
        let parsed = list(test_app()).await;
        assert_eq!(parsed.count, parsed.events.len());
        assert!(parsed.count > 0);
    }

    #[tokio::test]
    async fn test_recorded_event_lands_at_the_head() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/audit/events")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({
                            "actor": "usr-demo",
                            "action": "alert.status_changed",
                            "resource": "alert-001",
                            "risk_level": "low"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let parsed = list(app).await;
        assert_eq!(parsed.events[0].actor, "usr-demo");
        assert_eq!(parsed.events[0].action, "alert.status_changed");
    }
}
