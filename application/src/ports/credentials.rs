//! Credential port
//!
//! Resolves the provider credential at request time.

/// Source of the provider API key
pub trait CredentialProvider: Send + Sync {
    /// The API key, or `None` when it is not configured
    fn api_key(&self) -> Option<String>;
}
