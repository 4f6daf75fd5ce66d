//! Sage client port
//!
//! How the terminal session reaches Sage: in-process through
//! [`AskSageUseCase`](crate::AskSageUseCase), or over HTTP through the proxy
//! endpoint.

use async_trait::async_trait;
use thiserror::Error;

/// A failed Sage request, carrying the message safe to show the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SageClientError {
    pub message: String,
}

impl SageClientError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait SageClient: Send + Sync {
    /// Ask Sage one question and wait for its answer
    async fn ask(&self, query: &str) -> Result<String, SageClientError>;
}
