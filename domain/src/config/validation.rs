//! Structured configuration issues.
//!
//! Loaders report problems as a list of [`ConfigIssue`]s instead of failing on
//! the first one, so the CLI can print every warning at startup.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: startup continues, but requests may fail.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A required string field is empty.
    EmptyValue { field: String },
    /// A socket address could not be parsed.
    InvalidAddress { field: String, value: String },
    /// A URL does not use http or https.
    InvalidUrl { field: String, value: String },
    /// A model name outside the known model family.
    UnknownModel { field: String, value: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
