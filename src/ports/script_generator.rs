//! Script generation port definition.

use thiserror::Error;

/// Failure reported by a generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The request never produced an HTTP response (connect, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    MalformedResponse(String),

    /// The model refused the prompt.
    #[error("Prompt blocked by model: {0}")]
    Blocked(String),
}

/// Port for the external text-generation service.
///
/// One call per prompt. An empty `Ok` is a valid answer; callers decide
/// whether it is usable.
pub trait ScriptGenerator {
    /// Send `prompt` and return the raw response text.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<G: ScriptGenerator + ?Sized> ScriptGenerator for Box<G> {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}

/// Offline generator returning a fenced placeholder script.
#[derive(Debug, Clone, Default)]
pub struct MockScriptGenerator;

impl ScriptGenerator for MockScriptGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut script = String::from("```powershell\n");
        script.push_str("# Mock Storage Spaces Direct deployment script\n");
        script.push_str(&format!("# Prompt length: {} chars\n", prompt.len()));
        for line in prompt.lines().filter(|line| line.contains(": ")) {
            script.push_str(&format!("# {}\n", line));
        }
        script.push_str("Write-Host 'Mock mode: no deployment steps were generated.'\n");
        script.push_str("```\n");
        Ok(script)
    }
}
