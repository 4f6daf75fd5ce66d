//! Console rendering of transcript lines

use colored::Colorize;
use tooltrack_domain::SEPARATOR;

/// Formats transcript lines for console display
#[derive(Debug, Clone, Copy)]
pub struct TranscriptView {
    color: bool,
}

impl TranscriptView {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render a run of lines, one per output line
    pub fn render(&self, lines: &[String]) -> String {
        let mut output = String::new();
        for line in lines {
            output.push_str(&self.render_line(line));
            output.push('\n');
        }
        output
    }

    pub fn render_line(&self, line: &str) -> String {
        if !self.color {
            return line.to_string();
        }

        if line == SEPARATOR {
            line.dimmed().to_string()
        } else if line.starts_with("> ") {
            line.cyan().bold().to_string()
        } else if line.starts_with('❌') {
            line.red().to_string()
        } else if line.starts_with('✅') {
            line.green().to_string()
        } else if line.starts_with("🤖 Sage:") {
            line.yellow().to_string()
        } else {
            line.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render_keeps_lines_verbatim() {
        let view = TranscriptView::new(false);
        let lines = vec![
            "> track".to_string(),
            "📦 Total tools tracked: 0".to_string(),
            "---".to_string(),
        ];
        assert_eq!(
            view.render(&lines),
            "> track\n📦 Total tools tracked: 0\n---\n"
        );
    }

    #[test]
    fn test_plain_render_empty() {
        assert_eq!(TranscriptView::new(false).render(&[]), "");
    }
}
