//! Ask Sage use case.
//!
//! Forwards one user query, wrapped in the Sage preamble, to the text
//! generation provider and returns its answer.
//!
//! Validation and configuration errors are reported as-is. Provider errors
//! are logged in full and collapsed into one opaque [`AskSageError::Provider`].

use crate::ports::credentials::CredentialProvider;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::sage_client::{SageClient, SageClientError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tooltrack_domain::util::truncate_str;
use tooltrack_domain::{DomainError, SageQuery, SagePromptTemplate};
use tracing::{debug, error, info};

/// Errors that can occur while asking Sage.
///
/// The `Display` text of each variant is what callers may show to users.
#[derive(Error, Debug)]
pub enum AskSageError {
    #[error("{0}")]
    InvalidQuery(#[from] DomainError),

    #[error("Google Gemini API key not configured")]
    MissingCredential,

    #[error("AI service error")]
    Provider(#[source] GatewayError),
}

/// Use case for answering a Sage query.
#[derive(Clone)]
pub struct AskSageUseCase {
    gateway: Arc<dyn LlmGateway>,
    credentials: Arc<dyn CredentialProvider>,
}

impl AskSageUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    /// Answer `query`.
    ///
    /// Order of checks: the query must be non-empty, then the credential
    /// must be present. No provider call happens unless both pass.
    pub async fn execute(&self, query: &str) -> Result<String, AskSageError> {
        let query = SageQuery::try_new(query)?;

        let api_key = match self.credentials.api_key() {
            Some(key) if !key.is_empty() => key,
            _ => {
                error!("Sage request rejected: provider API key not configured");
                return Err(AskSageError::MissingCredential);
            }
        };

        info!("Sage query: {}", truncate_str(query.content(), 100));

        let prompt = SagePromptTemplate::build(&query);
        debug!(
            "Sending {} byte prompt to {}",
            prompt.len(),
            self.gateway.name()
        );

        match self.gateway.generate(&api_key, &prompt).await {
            Ok(text) => {
                debug!("Sage answered with {} bytes", text.len());
                Ok(text)
            }
            Err(e) => {
                error!("Sage API error: {}", e);
                Err(AskSageError::Provider(e))
            }
        }
    }
}

#[async_trait]
impl SageClient for AskSageUseCase {
    async fn ask(&self, query: &str) -> Result<String, SageClientError> {
        self.execute(query)
            .await
            .map_err(|e| SageClientError::new(e.to_string()))
    }
}
