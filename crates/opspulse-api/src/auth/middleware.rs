// Authorization gate
//
// 401 here is one of only two failures this API surfaces; everything
// behind the gate masks its errors as 200s.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use super::config::{AuthConfig, AuthMode};
use crate::common::ErrorResponse;

/// Shared state for the auth gate
#[derive(Clone)]
pub struct AuthState {
    pub config: AuthConfig,
}

impl AuthState {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

/// Presence check for the Authorization header
pub async fn require_auth(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    if state.config.mode == AuthMode::Disabled {
        return next.run(request).await;
    }

    if request.headers().contains_key(header::AUTHORIZATION) {
        next.run(request).await
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Missing Authorization header".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, middleware::from_fn_with_state, routing::get, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn gated_app(mode: AuthMode) -> Router {
        let state = AuthState::new(AuthConfig { mode });
        Router::new()
            .route("/v1/test", get(|| async { "ok" }))
            .layer(from_fn_with_state(state, require_auth))
    }

    #[tokio::test]
    async fn test_missing_header_is_401_with_error_field() {
        let app = gated_app(AuthMode::Header);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/v1/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(parsed.get("error").is_some());
    }

    #[tokio::test]
    async fn test_any_header_value_passes() {
        let app = gated_app(AuthMode::Header);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/v1/test")
                    .header("Authorization", "Bearer anything-at-all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_disabled_mode_skips_the_gate() {
        let app = gated_app(AuthMode::Disabled);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/v1/test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
