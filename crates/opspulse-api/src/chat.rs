// Chat assistant routes
//
// The assistant is a keyword classifier with canned blocks; there is no
// model call and no conversation state, so this module needs no AppState.

use axum::{routing::post, Json, Router};
use chrono::{DateTime, Utc};
use opspulse_core::{select_response, ResponseCategory};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Context and user_id arrive from the UI but the selector ignores them
#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatMessageRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatMessageResponse {
    pub response: String,
    pub suggestions: Vec<String>,
    pub category: ResponseCategory,
    pub timestamp: DateTime<Utc>,
}

pub fn routes() -> Router {
    Router::new().route("/v1/chat/message", post(post_message))
}

/// POST /v1/chat/message - Canned assistant reply
#[utoipa::path(
    post,
    path = "/v1/chat/message",
    request_body = ChatMessageRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatMessageResponse),
        (status = 401, description = "Missing Authorization header")
    ),
    tag = "chat"
)]
pub async fn post_message(Json(req): Json<ChatMessageRequest>) -> Json<ChatMessageResponse> {
    let canned = select_response(&req.message);

    Json(ChatMessageResponse {
        response: canned.message.to_string(),
        suggestions: canned.suggestions.iter().map(|s| s.to_string()).collect(),
        category: canned.category,
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use opspulse_core::responder;
    use serde_json::json;
    use tower::ServiceExt;

    async fn send(message: &str) -> serde_json::Value {
        let response = routes()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/chat/message")
                    .header("content-type", "application/json")
                    .body(Body::from(json!({"message": message}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_cost_message_returns_cost_block_verbatim() {
        let parsed = send("where does our cost go?").await;
        assert_eq!(parsed["response"], responder::COST_RESPONSE.message);
        assert_eq!(parsed["suggestions"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_carbon_message_returns_esg_block() {
        let parsed = send("show me the carbon numbers").await;
        assert_eq!(parsed["response"], responder::ESG_RESPONSE.message);
        assert_eq!(parsed["category"], "sustainability");
    }

    #[tokio::test]
    async fn test_unmatched_message_returns_default_block() {
        let parsed = send("good morning!").await;
        assert_eq!(parsed["response"], responder::GENERAL_RESPONSE.message);
        assert_eq!(parsed["category"], "general");
    }
}
