use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::deployment::ValidationErrors;
use crate::ports::GenerationError;

/// Library-wide error type for s2d operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Deployment configuration rejected by the validator.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Generation settings file named explicitly but absent.
    #[error("Settings file not found: {}", .0.display())]
    SettingsMissing(PathBuf),

    /// Deployment file could not be parsed.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Prompt template could not be rendered.
    #[error("Prompt rendering failed: {0}")]
    PromptRender(String),

    /// The generation call returned no usable text.
    #[error("Failed to generate script: Empty response from AI.")]
    EmptyGenerationResult,

    /// The generation call itself failed.
    #[error("Failed to generate script: {0}")]
    GenerationCallFailure(#[from] GenerationError),

    /// Refusing to overwrite an existing file.
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),

    /// Interactive input was aborted or failed.
    #[error("Interactive input failed: {0}")]
    Interaction(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
