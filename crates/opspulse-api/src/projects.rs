// Project routes

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use opspulse_core::{seeds, Project};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::common::SuccessResponse;
use crate::services::ProjectsService;

/// App state for project routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProjectsService>,
}

impl AppState {
    pub fn new(service: Arc<ProjectsService>) -> Self {
        Self { service }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProgressRequest {
    /// New completion percentage; values over 100 are clamped
    pub progress: u8,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/projects", get(list))
        .route("/v1/projects/:project_id/progress", put(update_progress))
        .with_state(state)
}

/// GET /v1/projects - Tracked initiatives
#[utoipa::path(
    get,
    path = "/v1/projects",
    responses(
        (status = 200, description = "Project list", body = ProjectsResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "projects"
)]
pub async fn list(State(state): State<AppState>) -> Json<ProjectsResponse> {
    let projects = match state.service.list().await {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!("Failed to load projects: {}", e);
            seeds::projects_seed(Utc::now())
        }
    };

    let count = projects.len();
    Json(ProjectsResponse { projects, count })
}

/// PUT /v1/projects/{project_id}/progress - Update completion percentage
///
/// An unknown id is a no-op that still reports success.
#[utoipa::path(
    put,
    path = "/v1/projects/{project_id}/progress",
    params(
        ("project_id" = String, Path, description = "Project ID")
    ),
    request_body = UpdateProgressRequest,
    responses(
        (status = 200, description = "Acknowledged", body = SuccessResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "projects"
)]
pub async fn update_progress(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(req): Json<UpdateProgressRequest>,
) -> Json<SuccessResponse> {
    match state.service.update_progress(&project_id, req.progress).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!(%project_id, "Progress update for unknown project ignored");
        }
        Err(e) => {
            tracing::error!("Failed to update project {}: {}", project_id, e);
        }
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
        routes(AppState::new(Arc::new(ProjectsService::new(store))))
    }

    async fn list_projects(app: Router) -> ProjectsResponse {
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/projects")
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
    async fn test_cold_store_seeds_exactly_three_projects() {
        let app = test_app();

        let first = list_projects(app.clone()).await;
        assert_eq!(first.count, 3);

        // No re-seeding: the second call returns the same three.
        let second = list_projects(app).await;
        assert_eq!(second.count, 3);
        let first_ids: Vec<_> = first.projects.iter().map(|p| p.id.clone()).collect();
        let second_ids: Vec<_> = second.projects.iter().map(|p| p.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[tokio::test]
    async fn test_progress_update_clamps_to_100() {
        let app = test_app();
        list_projects(app.clone()).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/v1/projects/proj-001/progress")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"progress": 250}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let listed = list_projects(app).await;
        let project = listed.projects.iter().find(|p| p.id == "proj-001").unwrap();
        assert_eq!(project.progress, 100);
    }

    #[tokio::test]
    async fn test_unknown_project_id_still_succeeds() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/v1/projects/proj-999/progress")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"progress": 10}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["success"], json!(true));
    }
}
