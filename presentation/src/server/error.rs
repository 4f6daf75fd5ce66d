//! HTTP error responses for the proxy endpoint

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tooltrack_application::AskSageError;

/// Message returned for every failure past validation
pub const GENERIC_ERROR: &str = "AI service error";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// An error status plus the message the client sees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<AskSageError> for ApiError {
    fn from(e: AskSageError) -> Self {
        match e {
            AskSageError::InvalidQuery(_) => Self::bad_request(e.to_string()),
            AskSageError::MissingCredential | AskSageError::Provider(_) => {
                Self::internal(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}
