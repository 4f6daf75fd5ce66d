//! Intent classification for terminal commands

/// Prefix introducing a Sage query, matched case-insensitively
pub const SAGE_PREFIX: &str = "sage ";

/// The classified meaning of one raw command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Help,
    Scan,
    Track,
    /// Ask Sage; `query` keeps the case the user typed
    Sage { query: String },
    Clear,
    Unknown,
}

/// A classification rule: `(normalized, trimmed)` → matched intent
type Rule = fn(&str, &str) -> Option<Intent>;

/// Rules in priority order, first match wins
const RULES: &[Rule] = &[help, scan, track, sage, clear];

impl Intent {
    /// Classify a raw command line.
    ///
    /// The input is trimmed and lowercased for matching only. Every input,
    /// including the empty string, maps to some intent.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let normalized = trimmed.to_lowercase();

        RULES
            .iter()
            .find_map(|rule| rule(&normalized, trimmed))
            .unwrap_or(Intent::Unknown)
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Help => "help",
            Intent::Scan => "scan",
            Intent::Track => "track",
            Intent::Sage { .. } => "sage",
            Intent::Clear => "clear",
            Intent::Unknown => "unknown",
        }
    }
}

fn help(normalized: &str, _: &str) -> Option<Intent> {
    (normalized == "help").then_some(Intent::Help)
}

fn scan(normalized: &str, _: &str) -> Option<Intent> {
    (normalized == "scan").then_some(Intent::Scan)
}

fn track(normalized: &str, _: &str) -> Option<Intent> {
    (normalized == "track").then_some(Intent::Track)
}

fn sage(_: &str, trimmed: &str) -> Option<Intent> {
    let prefix = trimmed.get(..SAGE_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(SAGE_PREFIX) {
        return None;
    }
    Some(Intent::Sage {
        query: trimmed[SAGE_PREFIX.len()..].to_string(),
    })
}

fn clear(normalized: &str, _: &str) -> Option<Intent> {
    (normalized == "clear").then_some(Intent::Clear)
}
