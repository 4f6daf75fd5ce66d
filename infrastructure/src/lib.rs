//! Infrastructure layer for tooltrack
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod gemini;
pub mod proxy;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileOutputConfig, FileReplConfig, FileSageConfig, FileServerConfig,
};
pub use credentials::EnvCredentialProvider;
pub use gemini::GeminiLlmGateway;
pub use proxy::HttpSageClient;
