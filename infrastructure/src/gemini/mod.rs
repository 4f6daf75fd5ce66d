//! Google Gemini adapter
//!
//! Implements [`LlmGateway`](tooltrack_application::LlmGateway) against the
//! Generative Language `generateContent` REST endpoint.

mod gateway;
pub mod types;

pub use gateway::GeminiLlmGateway;
