//! Prompt template for the Sage assistant

use crate::core::query::SageQuery;

/// Builds the combined prompt sent to the provider
pub struct SagePromptTemplate;

impl SagePromptTemplate {
    /// Fixed instructions identifying Sage and its domain
    pub fn preamble() -> &'static str {
        "You are Sage, an AI assistant for a Tool Tracking Device. Help users with tool management, organization, and maintenance advice. Keep responses concise and helpful."
    }

    /// Preamble followed by the literal user query
    pub fn build(query: &SageQuery) -> String {
        format!("{}\n\nUser query: {}", Self::preamble(), query.content())
    }
}
