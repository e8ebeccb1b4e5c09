// Notification routes

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use opspulse_core::Notification;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::common::SuccessResponse;
use crate::services::NotificationsService;

/// App state for notification routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NotificationsService>,
}

impl AppState {
    pub fn new(service: Arc<NotificationsService>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/notifications", get(list))
        .route("/v1/notifications/read-all", post(mark_all_read))
        .route("/v1/notifications/:notification_id/read", post(mark_read))
        .with_state(state)
}

/// GET /v1/notifications - The feed, regenerated on every read
#[utoipa::path(
    get,
    path = "/v1/notifications",
    responses(
        (status = 200, description = "Notification feed", body = NotificationsResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "notifications"
)]
pub async fn list(State(state): State<AppState>) -> Json<NotificationsResponse> {
    let notifications = match state.service.current().await {
        Ok(feed) => feed,
        Err(e) => {
            tracing::error!("Failed to regenerate notifications: {}", e);
            // The store write failed; serve a freshly generated feed anyway.
            let mut rng = rand::thread_rng();
            opspulse_core::seeds::notification_feed(chrono::Utc::now(), &mut rng)
        }
    };

    let unread_count = notifications.iter().filter(|n| !n.read).count();
    Json(NotificationsResponse {
        notifications,
        unread_count,
    })
}

/// POST /v1/notifications/{notification_id}/read - Mark one entry read
///
/// An unknown id is a no-op that still reports success.
#[utoipa::path(
    post,
    path = "/v1/notifications/{notification_id}/read",
    params(
        ("notification_id" = String, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Acknowledged", body = SuccessResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "notifications"
)]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> Json<SuccessResponse> {
    match state.service.mark_read(&notification_id).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!(%notification_id, "Read receipt for unknown notification ignored");
        }
        Err(e) => {
            tracing::error!("Failed to mark notification {}: {}", notification_id, e);
        }
    }

    Json(SuccessResponse::ok())
}

/// POST /v1/notifications/read-all - Mark the whole feed read
#[utoipa::path(
    post,
    path = "/v1/notifications/read-all",
    responses(
        (status = 200, description = "Acknowledged", body = SuccessResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "notifications"
)]
pub async fn mark_all_read(State(state): State<AppState>) -> Json<SuccessResponse> {
    if let Err(e) = state.service.mark_all_read().await {
        tracing::error!("Failed to mark all notifications read: {}", e);
    }

    Json(SuccessResponse::with_message("All notifications marked read"))
}
