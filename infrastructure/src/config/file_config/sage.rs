//! Sage provider configuration from TOML (`[sage]` section)

use serde::{Deserialize, Serialize};
use tooltrack_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Prefix shared by every model the `generateContent` adapter targets
const MODEL_FAMILY: &str = "gemini-";

/// Raw Sage provider configuration from TOML
///
/// The API key itself is never read from the file, only the name of the
/// environment variable holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSageConfig {
    /// Gemini model name
    pub model: String,
    /// Base URL of the Generative Language API
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileSageConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: crate::credentials::DEFAULT_API_KEY_ENV.to_string(),
        }
    }
}

impl FileSageConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let required = [
            ("sage.model", &self.model),
            ("sage.api_key_env", &self.api_key_env),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    message: format!("{} must not be empty", field),
                });
            }
        }

        let model = self.model.trim();
        if !model.is_empty() && !model.starts_with(MODEL_FAMILY) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::UnknownModel {
                    field: "sage.model".to_string(),
                    value: self.model.clone(),
                },
                message: format!(
                    "sage.model: '{}' is not a {}* model, requests may be rejected",
                    self.model, MODEL_FAMILY
                ),
            });
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::InvalidUrl {
                    field: "sage.base_url".to_string(),
                    value: self.base_url.clone(),
                },
                message: format!("sage.base_url: '{}' is not an http(s) URL", self.base_url),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FileSageConfig::default().validate().is_empty());
    }

    #[test]
    fn test_blank_model_reported() {
        let config = FileSageConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "sage.model must not be empty");
    }

    #[test]
    fn test_unknown_model_is_warning() {
        let config = FileSageConfig {
            model: "gpt-4o".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(!issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::UnknownModel {
                field: "sage.model".to_string(),
                value: "gpt-4o".to_string(),
            }
        );
    }
}
