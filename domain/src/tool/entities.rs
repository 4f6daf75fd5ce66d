//! Tool entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a tracked tool, derived from its creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(i64);

impl ToolId {
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// The smallest id strictly greater than this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked physical tool (Entity)
///
/// All fields are fixed at creation. There is no rename, update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    id: ToolId,
    name: String,
    qr_code: String,
    date_added: DateTime<Utc>,
}

impl Tool {
    /// Create a tool; `index` is its 1-based position in the registry
    pub fn new(
        id: ToolId,
        index: usize,
        qr_code: impl Into<String>,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: format!("Tool-{}", index),
            qr_code: qr_code.into(),
            date_added,
        }
    }

    pub fn id(&self) -> ToolId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qr_code(&self) -> &str {
        &self.qr_code
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}
