//! Tool domain
//!
//! Tracked tools and the in-memory registry that holds them for a session.

pub mod entities;
pub mod registry;
