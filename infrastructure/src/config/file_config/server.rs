//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tooltrack_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the proxy endpoint listens on
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn bind_addr(&self) -> Option<SocketAddr> {
        self.bind.parse().ok()
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.bind_addr().is_some() {
            return Vec::new();
        }
        vec![ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::InvalidAddress {
                field: "server.bind".to_string(),
                value: self.bind.clone(),
            },
            message: format!("server.bind: '{}' is not a socket address", self.bind),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_parses() {
        let addr = FileServerConfig::default().bind_addr().unwrap();
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_invalid_bind_reported() {
        let config = FileServerConfig {
            bind: "localhost".to_string(),
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::InvalidAddress { field, .. } if field == "server.bind"
        ));
    }
}
