//! Sage query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A query to be answered by Sage (Value Object)
///
/// Only the empty string is rejected. Whitespace is kept as typed, since the
/// query is forwarded verbatim to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SageQuery {
    content: String,
}

impl SageQuery {
    /// Try to create a new query, rejecting the empty string
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            Err(DomainError::InvalidQuery)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for SageQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
