//! Environment-backed credential provider

use tooltrack_application::CredentialProvider;

/// Default environment variable holding the Gemini API key
pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_GEMINI_API_KEY";

/// Reads the API key from an environment variable on every request,
/// so a key exported after startup is picked up without a restart.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    var: String,
}

impl EnvCredentialProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}
