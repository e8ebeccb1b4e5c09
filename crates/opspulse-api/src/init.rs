// Data seeding routes

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::services::InitService;

/// App state for init routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InitService>,
}

impl AppState {
    pub fn new(service: Arc<InitService>) -> Self {
        Self { service }
    }
}

/// Outcome of a seeding run; success even when collections failed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InitDataResponse {
    pub success: bool,
    pub version: String,
    pub already_initialized: bool,
    pub seeded: Vec<String>,
    pub failed: Vec<String>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/init/data", post(seed_data))
        .with_state(state)
}

/// POST /v1/init/data - Seed every collection
#[utoipa::path(
    post,
    path = "/v1/init/data",
    responses(
        (status = 200, description = "Seeding summary", body = InitDataResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "init"
)]
pub async fn seed_data(State(state): State<AppState>) -> Json<InitDataResponse> {
    let summary = state.service.seed_all().await;

    Json(InitDataResponse {
        success: true,
        version: summary.version,
        already_initialized: summary.already_initialized,
        seeded: summary.seeded,
        failed: summary.failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use opspulse_core::InMemoryKvStore;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let store = Arc::new(InMemoryKvStore::new());
        routes(AppState::new(Arc::new(InitService::new(store))))
    }

    async fn seed(app: Router) -> InitDataResponse {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/init/data")
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
    async fn test_seeding_is_idempotent_on_the_version() {
        let app = test_app();

        let first = seed(app.clone()).await;
        assert!(first.success);
        assert_eq!(first.version, "1.0.0");
        assert!(!first.already_initialized);
        assert!(first.failed.is_empty());

        let second = seed(app).await;
        assert!(second.success);
        assert_eq!(second.version, "1.0.0");
        assert!(second.already_initialized);
    }

    #[tokio::test]
    async fn test_seeding_covers_every_collection() {
        let summary = seed(test_app()).await;

        for key in [
            "metrics:dashboard:current",
            "alerts:current",
            "projects:current",
            "notifications:current",
            "audit:events",
            "system:initialized",
        ] {
            assert!(
                summary.seeded.iter().any(|k| k == key),
                "missing seeded key {key}"
            );
        }
    }
}
