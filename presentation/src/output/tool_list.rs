//! Panel listing the tracked tools

use colored::Colorize;
use tooltrack_domain::Tool;

/// Shown when no tool has been registered
pub const EMPTY_MESSAGE: &str = "No tools tracked yet. Type 'scan' to register one.";

/// Formats the tool registry as a side panel
#[derive(Debug, Clone, Copy)]
pub struct ToolListView {
    color: bool,
}

impl ToolListView {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, tools: &[Tool]) -> String {
        let mut output = String::new();

        let header = format!("Tracked Tools ({})", tools.len());
        if self.color {
            output.push_str(&header.cyan().bold().to_string());
        } else {
            output.push_str(&header);
        }
        output.push('\n');

        if tools.is_empty() {
            output.push_str("  ");
            output.push_str(EMPTY_MESSAGE);
            output.push('\n');
            return output;
        }

        for tool in tools {
            let added = tool.date_added().format("%Y-%m-%d %H:%M:%S");
            let name = if self.color {
                tool.name().bold().to_string()
            } else {
                tool.name().to_string()
            };
            output.push_str(&format!(
                "  • {}  {}  (added {})\n",
                name,
                tool.qr_code(),
                added
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tooltrack_domain::ToolRegistry;

    #[test]
    fn test_empty_panel() {
        let view = ToolListView::new(false);
        assert_eq!(
            view.render(&[]),
            format!("Tracked Tools (0)\n  {}\n", EMPTY_MESSAGE)
        );
    }

    #[test]
    fn test_panel_lists_tools_in_order() {
        let mut registry = ToolRegistry::new();
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        registry.add_tool_at("QR-HAMMER", now);
        registry.add_tool_at("QR-WRENCH", now);

        let rendered = ToolListView::new(false).render(registry.tools());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Tracked Tools (2)");
        assert_eq!(lines[1], "  • Tool-1  QR-HAMMER  (added 2026-03-14 09:30:00)");
        assert!(lines[2].starts_with("  • Tool-2  QR-WRENCH"));
    }
}
