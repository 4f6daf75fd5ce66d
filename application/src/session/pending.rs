//! Handoff between staging a Sage request and completing it.
//!
//! [`TerminalSession::handle_command`](super::TerminalSession::handle_command)
//! only stages a `sage` command and returns a [`PendingSage`] marker. The
//! caller resolves it with [`resolve_pending`] and hands the resulting
//! [`SageCompletion`] back to the session.

use crate::ports::sage_client::{SageClient, SageClientError};
use tracing::debug;

/// A staged Sage request awaiting its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSage {
    id: u64,
    query: String,
}

impl PendingSage {
    pub(crate) fn new(id: u64, query: impl Into<String>) -> Self {
        Self {
            id,
            query: query.into(),
        }
    }

    /// Per-session sequence number, starting at 1
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The query in the case the user typed it
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Outcome of one pending request
#[derive(Debug, Clone)]
pub struct SageCompletion {
    pub pending: PendingSage,
    pub result: Result<String, SageClientError>,
}

/// Perform the network call for a staged request.
pub async fn resolve_pending(client: &dyn SageClient, pending: PendingSage) -> SageCompletion {
    debug!("Resolving Sage request #{}", pending.id());
    let result = client.ask(pending.query()).await;
    SageCompletion { pending, result }
}
