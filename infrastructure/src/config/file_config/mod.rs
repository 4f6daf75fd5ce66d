//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod output;
mod repl;
mod sage;
mod server;

pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use sage::FileSageConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use tooltrack_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Proxy endpoint server settings
    pub server: FileServerConfig,
    /// Sage provider settings
    pub sage: FileSageConfig,
    /// Terminal REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.server.validate());
        issues.extend(self.sage.validate());
        issues
    }
}
