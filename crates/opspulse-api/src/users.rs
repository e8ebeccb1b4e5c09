// User profile routes
//
// The missing-profile 404 is the only not-found this API surfaces.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use opspulse_core::{AuditEvent, DashboardMetrics, UserPreferences, UserProfile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::common::{ErrorResponse, SuccessResponse};
use crate::services::UsersService;

/// App state for user routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<UsersService>,
}

impl AppState {
    pub fn new(service: Arc<UsersService>) -> Self {
        Self { service }
    }
}

/// Per-user dashboard view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDashboard {
    pub user: UserProfile,
    pub metrics: DashboardMetrics,
    pub recent_activities: Vec<AuditEvent>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePreferencesRequest {
    pub preferences: UserPreferences,
}

type NotFound = (StatusCode, Json<ErrorResponse>);

fn profile_not_found(user_id: &str) -> NotFound {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("No profile for user {user_id}"),
        }),
    )
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/users/:user_id/profile", get(profile))
        .route("/v1/users/:user_id/dashboard", get(dashboard))
        .route("/v1/users/:user_id/preferences", put(update_preferences))
        .with_state(state)
}

/// GET /v1/users/{user_id}/profile - Stored profile
#[utoipa::path(
    get,
    path = "/v1/users/{user_id}/profile",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Profile found", body = UserProfile),
        (status = 401, description = "Missing Authorization header"),
        (status = 404, description = "Profile absent", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, NotFound> {
    let profile = state.service.profile(&user_id).await.map_err(|e| {
        tracing::error!("Failed to load profile {}: {}", user_id, e);
        profile_not_found(&user_id)
    })?;

    profile.map(Json).ok_or_else(|| profile_not_found(&user_id))
}

/// GET /v1/users/{user_id}/dashboard - Profile plus metrics and activity
#[utoipa::path(
    get,
    path = "/v1/users/{user_id}/dashboard",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Dashboard view", body = UserDashboard),
        (status = 401, description = "Missing Authorization header"),
        (status = 404, description = "Profile absent", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserDashboard>, NotFound> {
    let view = state.service.dashboard(&user_id).await.map_err(|e| {
        tracing::error!("Failed to build dashboard for {}: {}", user_id, e);
        profile_not_found(&user_id)
    })?;

    view.map(Json).ok_or_else(|| profile_not_found(&user_id))
}

/// PUT /v1/users/{user_id}/preferences - Replace stored preferences
///
/// An unknown user is a no-op that still reports success.
#[utoipa::path(
    put,
    path = "/v1/users/{user_id}/preferences",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    request_body = UpdatePreferencesRequest,
    responses(
        (status = 200, description = "Acknowledged", body = SuccessResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "users"
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<UpdatePreferencesRequest>,
) -> Json<SuccessResponse> {
    match state
        .service
        .update_preferences(&user_id, req.preferences)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!(%user_id, "Preference update for unknown user ignored");
        }
        Err(e) => {
            tracing::error!("Failed to update preferences for {}: {}", user_id, e);
        }
    }

    Json(SuccessResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{AuditService, MetricsService};
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use opspulse_core::{keys, put_json, seeds, InMemoryKvStore, KvStore};
    use serde_json::json;
    use tower::ServiceExt;

    async fn test_app_with_seeded_profiles() -> Router {
        let store: Arc<dyn KvStore> = Arc::new(InMemoryKvStore::new());
        for profile in seeds::users_seed(chrono::Utc::now()) {
            put_json(
                store.as_ref(),
                &keys::user_profile_key(&profile.user_id),
                &profile,
            )
            .await
            .unwrap();
        }

        let metrics = Arc::new(MetricsService::new(store.clone()));
        let audit = Arc::new(AuditService::new(store.clone()));
        let service = Arc::new(UsersService::new(store, metrics, audit));
        routes(AppState::new(service))
    }

    #[tokio::test]
    async fn test_missing_profile_is_404_with_error_field() {
        let app = test_app_with_seeded_profiles().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/users/usr-nobody/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(parsed.get("error").is_some());
    }

    #[tokio::test]
    async fn test_dashboard_composes_profile_metrics_and_activity() {
        let app = test_app_with_seeded_profiles().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/users/usr-demo/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: UserDashboard = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.user.user_id, "usr-demo");
        assert!((95.0..=100.0).contains(&parsed.metrics.system_health));
        assert!(!parsed.recent_activities.is_empty());
        assert!(parsed.recent_activities.len() <= 5);
    }

    #[tokio::test]
    async fn test_preference_update_for_unknown_user_still_succeeds() {
        let app = test_app_with_seeded_profiles().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/v1/users/usr-nobody/preferences")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({"preferences": {
                            "theme": "light",
                            "email_alerts": false,
                            "digest_frequency": "off"
                        }})
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["success"], json!(true));
    }

    #[tokio::test]
    async fn test_preference_update_is_persisted() {
        let app = test_app_with_seeded_profiles().await;

        app.clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/v1/users/usr-demo/preferences")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({"preferences": {
                            "theme": "light",
                            "email_alerts": false,
                            "digest_frequency": "weekly"
                        }})
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/users/usr-demo/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: UserProfile = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.preferences.theme, "light");
        assert!(!parsed.preferences.email_alerts);
    }
}
