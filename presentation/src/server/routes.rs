//! Route table and handlers

use super::error::{ApiError, GENERIC_ERROR};
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tooltrack_application::{AskSageError, AskSageUseCase};
use tooltrack_domain::DomainError;
use tracing::{debug, error};

pub const SAGE_ROUTE: &str = "/api/sage";

#[derive(Clone)]
pub struct SageState {
    use_case: Arc<AskSageUseCase>,
}

#[derive(Debug, Serialize)]
pub struct SageResponse {
    pub response: String,
}

pub fn router(use_case: AskSageUseCase) -> Router {
    let state = SageState {
        use_case: Arc::new(use_case),
    };
    Router::new()
        .route(SAGE_ROUTE, post(ask_sage))
        .with_state(state)
}

/// `POST /api/sage` with body `{"query": "..."}`.
///
/// The body is parsed by hand so a malformed document maps to the generic
/// 500 rather than axum's own rejection.
async fn ask_sage(
    State(state): State<SageState>,
    body: Bytes,
) -> Result<Json<SageResponse>, ApiError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        error!("Sage API error: invalid request body: {}", e);
        ApiError::internal(GENERIC_ERROR)
    })?;

    // A `null` body is malformed; other non-object bodies simply lack a query
    if payload.is_null() {
        error!("Sage API error: request body is null");
        return Err(ApiError::internal(GENERIC_ERROR));
    }

    let query = payload
        .get("query")
        .and_then(Value::as_str)
        .ok_or(AskSageError::InvalidQuery(DomainError::InvalidQuery))?;
    debug!("Proxy received Sage query of {} bytes", query.len());

    let response = state.use_case.execute(query).await?;
    Ok(Json(SageResponse { response }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Mutex;
    use tooltrack_application::{CredentialProvider, GatewayError, LlmGateway};
    use tower::ServiceExt;

    struct FakeGateway {
        reply: Result<String, ()>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LlmGateway for FakeGateway {
        async fn generate(&self, _api_key: &str, prompt: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|_| GatewayError::ApiError {
                status: 429,
                message: "quota exceeded".to_string(),
            })
        }

        fn name(&self) -> &str {
            "fake"
        }
    }

    struct FixedKey(Option<&'static str>);

    impl CredentialProvider for FixedKey {
        fn api_key(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    fn app(reply: Result<&str, ()>, key: Option<&'static str>) -> (Router, Arc<FakeGateway>) {
        let gateway = Arc::new(FakeGateway {
            reply: reply.map(str::to_string),
            prompts: Mutex::new(Vec::new()),
        });
        let use_case = AskSageUseCase::new(gateway.clone(), Arc::new(FixedKey(key)));
        (router(use_case), gateway)
    }

    async fn post_body(app: Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(SAGE_ROUTE)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_query_is_bad_request() {
        let (app, gateway) = app(Ok("unused"), Some("k"));
        let (status, body) = post_body(app, "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            serde_json::json!({"error": "Query is required and must be a string"})
        );
        assert!(gateway.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_string_and_empty_query_are_bad_request() {
        let (app1, _) = app(Ok("unused"), Some("k"));
        let (status, _) = post_body(app1, r#"{"query": 42}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (app2, _) = app(Ok("unused"), Some("k"));
        let (status, _) = post_body(app2, r#"{"query": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_key_is_server_error() {
        let (app, gateway) = app(Ok("unused"), None);
        let (status, body) = post_body(app, r#"{"query": "hello"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            serde_json::json!({"error": "Google Gemini API key not configured"})
        );
        assert!(gateway.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_success_returns_response() {
        let (app, gateway) = app(Ok("Hi there"), Some("k"));
        let (status, body) = post_body(app, r#"{"query": "hello"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"response": "Hi there"}));

        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with("User query: hello"));
    }

    #[tokio::test]
    async fn test_provider_failure_is_generic() {
        let (app, _) = app(Err(()), Some("k"));
        let (status, body) = post_body(app, r#"{"query": "hello"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "AI service error"}));
    }

    #[tokio::test]
    async fn test_null_body_is_generic() {
        let (app1, gateway) = app(Ok("unused"), Some("k"));
        let (status, body) = post_body(app1, "null").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "AI service error"}));
        assert!(gateway.prompts.lock().unwrap().is_empty());

        let (app2, _) = app(Ok("unused"), Some("k"));
        let (status, _) = post_body(app2, "[1, 2]").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_generic() {
        let (app, _) = app(Ok("unused"), Some("k"));
        let (status, body) = post_body(app, "{not json").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "AI service error"}));
    }
}
