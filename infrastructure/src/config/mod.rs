//! Configuration file loading for tooltrack
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOOLTRACK_*` environment variables (`TOOLTRACK_SERVER__BIND=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./tooltrack.toml` or `./.tooltrack.toml`
//! 4. Global: `$XDG_CONFIG_HOME/tooltrack/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileOutputConfig, FileReplConfig, FileSageConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
