//! Prompt domain
//!
//! The instructional preamble Sage queries are wrapped in.

mod sage;

pub use sage::SagePromptTemplate;
