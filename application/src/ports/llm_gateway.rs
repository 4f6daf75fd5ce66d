//! LLM Gateway port
//!
//! Defines the interface for the external generative-text provider.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Provider returned {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Malformed provider response: {0}")]
    InvalidResponse(String),

    #[error("Prompt blocked by provider: {0}")]
    Blocked(String),

    #[error("Provider returned no text")]
    EmptyResponse,
}

/// Gateway for single-completion text generation
///
/// One call issues exactly one provider request. No retry, no streaming.
/// The credential is passed per call, since it is resolved per request.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generate a completion for `prompt` and return its plain text
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, GatewayError>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
