//! Application layer for tooltrack
//!
//! This crate contains use cases, port definitions, and the terminal session
//! controller. It depends only on the domain layer.

pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    credentials::CredentialProvider,
    llm_gateway::{GatewayError, LlmGateway},
    sage_client::{SageClient, SageClientError},
};
pub use session::{
    CommandOutcome, TerminalSession,
    pending::{PendingSage, SageCompletion, resolve_pending},
};
pub use use_cases::ask_sage::{AskSageError, AskSageUseCase};
