//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::domain::{AppError, GenerationConfig};
use crate::ports::{GenerationError, ScriptGenerator};

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";

/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// HTTP client for the generative language API.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    endpoint: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GenerationConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, endpoint: config.endpoint()?, client })
    }

    /// Create from the first API key environment variable that is set.
    pub fn from_env(config: &GenerationConfig) -> Result<Self, AppError> {
        let api_key = API_KEY_ENV_VARS
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|value| !value.trim().is_empty()))
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "{} environment variable not set",
                    API_KEY_ENV_VARS.join(" or ")
                ))
            })?;

        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl ApiResponse {
    fn into_text(self) -> Result<String, GenerationError> {
        if let Some(reason) = self.prompt_feedback.and_then(|feedback| feedback.block_reason) {
            return Err(GenerationError::Blocked(reason));
        }

        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content.parts.into_iter().filter_map(|part| part.text).collect::<String>()
            })
            .unwrap_or_default();

        Ok(text)
    }
}

impl ScriptGenerator for HttpGeminiClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ApiRequest {
            contents: vec![Content { role: "user", parts: vec![RequestPart { text: prompt }] }],
        };

        debug!(
            endpoint = %self.endpoint,
            prompt_chars = prompt.len(),
            "sending generation request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), "generation request rejected");
            return Err(GenerationError::Api { status: status.as_u16(), body });
        }

        let api_response: ApiResponse =
            response.json().map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;
        api_response.into_text()
    }
}
