//! HTTP client for `POST /api/sage`

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tooltrack_application::{SageClient, SageClientError};
use tracing::{debug, warn};

/// Message shown when the endpoint answers with something unexpected
const GENERIC_ERROR: &str = "AI service error";

#[derive(Debug, Deserialize)]
struct ProxyBody {
    response: Option<String>,
    error: Option<String>,
}

/// [`SageClient`] that talks to a running proxy endpoint
pub struct HttpSageClient {
    client: Client,
    endpoint: String,
}

impl HttpSageClient {
    /// `endpoint` is the full URL, e.g. `http://127.0.0.1:3000/api/sage`
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SageClient for HttpSageClient {
    async fn ask(&self, query: &str) -> Result<String, SageClientError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| {
                warn!("Sage endpoint unreachable: {}", e);
                SageClientError::new(format!("Could not reach Sage: {}", e))
            })?;

        let status = response.status();
        let body: ProxyBody = response.json().await.map_err(|e| {
            warn!("Unreadable Sage endpoint response ({}): {}", status, e);
            SageClientError::new(GENERIC_ERROR)
        })?;

        if status.is_success() {
            body.response
                .ok_or_else(|| SageClientError::new(GENERIC_ERROR))
        } else {
            Err(SageClientError::new(
                body.error.unwrap_or_else(|| GENERIC_ERROR.to_string()),
            ))
        }
    }
}
