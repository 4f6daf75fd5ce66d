//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
    /// Print the tracked tools panel after each registry change
    pub show_tools: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            history_file: None,
            show_tools: true,
        }
    }
}
