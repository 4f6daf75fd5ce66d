//! Core domain concepts shared across all subdomains.
//!
//! - [`query::SageQuery`] - a validated free-text query for the Sage assistant
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod query;
