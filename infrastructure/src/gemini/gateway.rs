//! Gemini LLM Gateway implementation

use super::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::config::FileSageConfig;
use async_trait::async_trait;
use reqwest::Client;
use tooltrack_application::{GatewayError, LlmGateway};
use tracing::{debug, info};

/// LLM Gateway for the Google Generative Language API
pub struct GeminiLlmGateway {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiLlmGateway {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, model)
    }

    /// Create a gateway sharing an existing HTTP client
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model = model.into();
        info!("GeminiLlmGateway initialized (model: {})", model);
        Self {
            client,
            base_url,
            model,
        }
    }

    pub fn from_config(config: &FileSageConfig) -> Self {
        Self::new(config.base_url.clone(), config.model.clone())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, GatewayError> {
        let url = self.endpoint();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::single_prompt(prompt))
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| match envelope.error.status {
                    Some(code) => format!("{} ({})", envelope.error.message, code),
                    None => envelope.error.message,
                })
                .unwrap_or(body);
            return Err(GatewayError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed.into_text()
    }

    fn name(&self) -> &str {
        "Google Gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{OneShotServer, closed_port_url};

    #[tokio::test]
    async fn test_generate_success() {
        let server = OneShotServer::start(
            200,
            r#"{"candidates":[{"content":{"parts":[{"text":"Hi there"}]},"finishReason":"STOP"}]}"#,
        )
        .await;
        let gateway = GeminiLlmGateway::new(server.base_url(), "gemini-pro");

        let text = gateway.generate("secret-key", "hello").await.unwrap();
        assert_eq!(text, "Hi there");

        let request = server.request().await;
        assert!(request.head.starts_with("POST /v1beta/models/gemini-pro:generateContent "));
        assert!(request.head.to_lowercase().contains("x-goog-api-key: secret-key"));
        assert!(request.body.contains("\"text\":\"hello\""));
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let server = OneShotServer::start(
            400,
            r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#,
        )
        .await;
        let gateway = GeminiLlmGateway::new(server.base_url(), "gemini-pro");

        let err = gateway.generate("bad", "hello").await.unwrap_err();
        match err {
            GatewayError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid (INVALID_ARGUMENT)");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let server = OneShotServer::start(200, "not json").await;
        let gateway = GeminiLlmGateway::new(server.base_url(), "gemini-pro");

        let err = gateway.generate("k", "hello").await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_generate_connection_refused() {
        let gateway = GeminiLlmGateway::new(closed_port_url().await, "gemini-pro");
        let err = gateway.generate("k", "hello").await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let gateway = GeminiLlmGateway::new("https://example.test/", "gemini-pro");
        assert_eq!(
            gateway.endpoint(),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
    }
}
