//! Domain layer for tooltrack
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Tool**: a tracked physical tool, registered from a scanned QR payload
//! - **Transcript**: the ordered log of lines shown in the terminal interface
//! - **Intent**: the classified meaning of one raw command line
//! - **Sage**: the AI assistant reached through the proxy endpoint

pub mod command;
pub mod config;
pub mod core;
pub mod prompt;
pub mod tool;
pub mod transcript;
pub mod util;

// Re-export commonly used types
pub use command::Intent;
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, query::SageQuery};
pub use prompt::SagePromptTemplate;
pub use tool::{
    entities::{Tool, ToolId},
    registry::ToolRegistry,
};
pub use transcript::{BANNER, SEPARATOR, Transcript};
