//! Presentation layer for tooltrack
//!
//! This crate contains the AI proxy HTTP endpoint, the interactive terminal,
//! output formatters and CLI definitions.

pub mod cli;
pub mod config;
pub mod output;
pub mod server;
pub mod terminal;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use config::{OutputConfig, ReplConfig};
pub use output::{tool_list::ToolListView, transcript::TranscriptView};
pub use server::{SAGE_ROUTE, router, serve};
pub use terminal::TerminalRepl;
