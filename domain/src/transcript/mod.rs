//! Transcript domain
//!
//! The ordered log of system messages, echoed commands and result lines
//! shown in the terminal interface.

pub mod lines;

/// Lines a fresh transcript starts with
pub const BANNER: [&str; 3] = [
    "Welcome to Tool Tracking Device",
    "Type 'help' for available commands",
    SEPARATOR,
];

/// Line closing every command's output
pub const SEPARATOR: &str = "---";

/// Insertion-ordered transcript lines (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Create a transcript holding only the banner
    pub fn new() -> Self {
        Self {
            lines: BANNER.iter().map(|line| line.to_string()).collect(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Discard everything and go back to the banner
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines appended after the transcript had `mark` lines.
    ///
    /// Returns the whole transcript if it was reset in between.
    pub fn lines_since(&self, mark: usize) -> &[String] {
        self.lines.get(mark..).unwrap_or(&self.lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_is_banner() {
        let transcript = Transcript::new();
        assert_eq!(transcript.lines(), &BANNER.map(String::from));
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn test_reset_discards_lines() {
        let mut transcript = Transcript::new();
        transcript.extend(["> foo", "bar", SEPARATOR]);
        assert_eq!(transcript.len(), 6);

        transcript.reset();
        assert_eq!(transcript, Transcript::new());
    }

    #[test]
    fn test_lines_since() {
        let mut transcript = Transcript::new();
        let mark = transcript.len();
        transcript.push("one");
        transcript.push("two");
        assert_eq!(transcript.lines_since(mark), &["one", "two"]);
    }

    #[test]
    fn test_lines_since_after_reset_returns_all() {
        let mut transcript = Transcript::new();
        transcript.extend(["a", "b", "c", "d"]);
        let mark = transcript.len();
        transcript.reset();
        assert_eq!(transcript.lines_since(mark).len(), 3);
    }
}
