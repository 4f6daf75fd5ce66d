//! In-memory tool registry
//!
//! An insertion-ordered sequence of [`Tool`]s. Tools are only ever appended;
//! the whole sequence lives as long as the session that owns it.

use super::entities::{Tool, ToolId};
use chrono::{DateTime, Utc};

/// Insertion-ordered registry of tracked tools
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
    last_id: Option<ToolId>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool from a decoded QR payload, stamped with the current time.
    ///
    /// The payload is opaque and not validated.
    pub fn add_tool(&mut self, qr_payload: impl Into<String>) -> &Tool {
        self.add_tool_at(qr_payload, Utc::now())
    }

    /// Register a tool created at `now`.
    ///
    /// Ids come from `now` in milliseconds. When two tools share a
    /// millisecond the later one is bumped past the previous id, so ids stay
    /// unique and strictly increasing.
    pub fn add_tool_at(&mut self, qr_payload: impl Into<String>, now: DateTime<Utc>) -> &Tool {
        let mut id = ToolId::from_millis(now.timestamp_millis());
        if let Some(last) = self.last_id {
            if id <= last {
                id = last.next();
            }
        }

        let index = self.tools.len() + 1;
        self.tools.push(Tool::new(id, index, qr_payload, now));
        self.last_id = Some(id);

        &self.tools[index - 1]
    }

    /// All tools in insertion order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Replace the full sequence (used by display collaborators).
    pub fn replace_all(&mut self, tools: Vec<Tool>) {
        let replaced_max = tools.iter().map(Tool::id).max();
        self.last_id = self.last_id.max(replaced_max);
        self.tools = tools;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_add_tool_names_sequentially() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        let first = registry.add_tool("A").clone();
        let second = registry.add_tool("B").clone();

        assert_eq!(first.name(), "Tool-1");
        assert_eq!(first.qr_code(), "A");
        assert_eq!(second.name(), "Tool-2");
        assert_eq!(second.qr_code(), "B");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_tool_keeps_insertion_order() {
        let mut registry = ToolRegistry::new();
        for payload in ["x", "y", "z"] {
            registry.add_tool(payload);
        }
        let codes: Vec<&str> = registry.tools().iter().map(Tool::qr_code).collect();
        assert_eq!(codes, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut registry = ToolRegistry::new();
        let now = at(1_700_000_000_000);

        let a = registry.add_tool_at("A", now).id();
        let b = registry.add_tool_at("B", now).id();
        let c = registry.add_tool_at("C", at(1_699_999_999_000)).id();

        assert_eq!(a.as_millis(), 1_700_000_000_000);
        assert!(b > a);
        assert!(c > b);
    }

    #[test]
    fn test_id_and_date_follow_clock() {
        let mut registry = ToolRegistry::new();
        let tool = registry.add_tool_at("QR", at(5_000)).clone();
        assert_eq!(tool.id().as_millis(), 5_000);
        assert_eq!(tool.date_added(), at(5_000));
    }

    #[test]
    fn test_payload_is_not_validated() {
        let mut registry = ToolRegistry::new();
        let tool = registry.add_tool("").clone();
        assert_eq!(tool.qr_code(), "");
        assert_eq!(tool.name(), "Tool-1");
    }

    #[test]
    fn test_replace_all_keeps_ids_increasing() {
        let mut registry = ToolRegistry::new();
        let tool = Tool::new(ToolId::from_millis(9_000), 1, "A", at(9_000));
        registry.replace_all(vec![tool]);
        assert_eq!(registry.len(), 1);

        let added = registry.add_tool_at("B", at(1_000)).clone();
        assert_eq!(added.name(), "Tool-2");
        assert_eq!(added.id().as_millis(), 9_001);
    }
}
