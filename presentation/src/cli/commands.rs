//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for tooltrack
#[derive(Parser, Debug)]
#[command(name = "tooltrack")]
#[command(
    author,
    version,
    about = "Tool tracking terminal with QR registration and the Sage AI assistant"
)]
#[command(long_about = r#"
tooltrack tracks physical tools registered from QR codes and answers
questions through Sage, an AI assistant backed by Google Gemini.

Subcommands:
  terminal   Interactive command terminal (default)
  serve      Run the Sage proxy endpoint (POST /api/sage)

The Gemini API key is read from $GOOGLE_GEMINI_API_KEY on every request.

Configuration files are loaded from (in priority order):
1. TOOLTRACK_* environment variables
2. --config <path>     Explicit config file
3. ./tooltrack.toml    Project-level config
4. ~/.config/tooltrack/config.toml   Global config

Example:
  tooltrack
  tooltrack serve --bind 0.0.0.0:3000
  tooltrack terminal --endpoint http://127.0.0.1:3000/api/sage
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the Sage proxy endpoint
    Serve {
        /// Listen address, overrides [server] bind
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },
    /// Start the interactive command terminal
    Terminal {
        /// Ask Sage through a running proxy endpoint instead of in-process
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },
}

impl Cli {
    /// The subcommand to run, defaulting to the terminal
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Terminal { endpoint: None })
    }
}
