//! Generated script post-processing and the result contract.

use serde::Serialize;

use crate::domain::AppError;

/// File name used when the script is saved.
pub const DEFAULT_SCRIPT_FILE_NAME: &str = "Deploy-S2D.ps1";

const FENCE: &str = "```";

/// Strip a leading fence line and a trailing fence marker, then trim.
///
/// Textual cleanup only; the body is not checked for valid PowerShell.
pub fn strip_code_fences(raw: &str) -> String {
    let mut body = raw.trim();

    if body.starts_with(FENCE) {
        body = match body.find('\n') {
            Some(index) => &body[index + 1..],
            None => "",
        };
    }

    if let Some(stripped) = body.trim_end().strip_suffix(FENCE) {
        body = stripped;
    }

    body.trim().to_string()
}

/// Outcome of one generation request, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationOutcome {
    pub fn succeeded(script: impl Into<String>) -> Self {
        Self { success: true, script: Some(script.into()), error: None }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, script: None, error: Some(error.into()) }
    }
}

impl From<Result<String, AppError>> for GenerationOutcome {
    fn from(result: Result<String, AppError>) -> Self {
        match result {
            Ok(script) => GenerationOutcome::succeeded(script),
            Err(err) => GenerationOutcome::failed(err.to_string()),
        }
    }
}
