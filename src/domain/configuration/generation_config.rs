//! Generation settings loaded from `.s2d/config.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Root of the settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Model API configuration.
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()
    }
}

/// Model API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Base URL of the generative language API.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model used for `generateContent`.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("model must not be empty"));
        }
        Ok(())
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let endpoint = format!("{}/models/{}:generateContent", base, self.model);
        Url::parse(&endpoint).map_err(|e| {
            AppError::config_error(format!("Invalid generation endpoint '{}': {}", endpoint, e))
        })
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_timeout() -> u64 {
    60
}
