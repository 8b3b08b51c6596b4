//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::{
    AppContext,
    commands::{generate, init, prompt, validate},
};
use crate::domain::configuration::load_settings;
use crate::domain::{DeploymentConfig, GenerationConfig, RawDeploymentConfig};
use crate::ports::{MockScriptGenerator, ScriptGenerator};
use crate::services::{
    HttpGeminiClient, MinijinjaTemplateRenderer, load_deployment_file, write_deployment_file,
    write_text,
};

pub use crate::app::commands::init::DEFAULT_DEPLOYMENT_FILE;
pub use crate::app::commands::validate::ValidationReport;
pub use crate::domain::{AppError, DEFAULT_SCRIPT_FILE_NAME, GenerationOutcome};

/// Options for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Explicit settings file; defaults to `.s2d/config.toml`.
    pub settings: Option<PathBuf>,
    /// Model name overriding the settings file.
    pub model: Option<String>,
    /// Use the offline mock generator instead of the model API.
    pub mock: bool,
}

/// Resolve generation settings relative to the current directory.
pub fn generation_config(options: &GenerateOptions) -> Result<GenerationConfig, AppError> {
    let root = std::env::current_dir()?;
    let mut config = load_settings(&root, options.settings.as_deref())?.generation;
    if let Some(model) = &options.model {
        config.model = model.clone();
    }
    config.validate()?;
    Ok(config)
}

fn create_context(
    options: &GenerateOptions,
) -> Result<AppContext<Box<dyn ScriptGenerator>, MinijinjaTemplateRenderer>, AppError> {
    let generator: Box<dyn ScriptGenerator> = if options.mock {
        info!("using mock script generator");
        Box::new(MockScriptGenerator)
    } else {
        let config = generation_config(options)?;
        info!(model = %config.model, "using generative language API");
        Box::new(HttpGeminiClient::from_env(&config)?)
    };
    Ok(AppContext::new(generator, MinijinjaTemplateRenderer::new()))
}

// =============================================================================
// Deployment File API
// =============================================================================

/// Write the sample deployment file.
pub fn init(path: &Path, force: bool) -> Result<(), AppError> {
    init::execute(path, force)
}

/// Read raw deployment values from a file.
pub fn load_deployment(path: &Path) -> Result<RawDeploymentConfig, AppError> {
    load_deployment_file(path)
}

/// Write a validated configuration back out in normalized form.
pub fn save_deployment(
    path: &Path,
    config: &DeploymentConfig,
    force: bool,
) -> Result<(), AppError> {
    write_deployment_file(path, &RawDeploymentConfig::from(config), force)
}

// =============================================================================
// Validation + Prompt API
// =============================================================================

/// Normalize and validate raw deployment values.
pub fn validate_config(raw: &RawDeploymentConfig) -> Result<DeploymentConfig, AppError> {
    validate::execute(raw)
}

/// Load and validate a deployment file.
pub fn validate_file(path: &Path) -> Result<DeploymentConfig, AppError> {
    validate::execute(&load_deployment_file(path)?)
}

/// Load a deployment file and report validation as data.
///
/// Only file and parse failures are returned as errors.
pub fn validation_report(path: &Path) -> Result<ValidationReport, AppError> {
    Ok(validate::report(&load_deployment_file(path)?))
}

/// Render the deployment prompt for a validated configuration.
pub fn render_prompt(config: &DeploymentConfig) -> Result<String, AppError> {
    prompt::render(&MinijinjaTemplateRenderer::new(), config)
}

/// Load, validate, and render the prompt for a deployment file.
pub fn render_prompt_file(path: &Path) -> Result<String, AppError> {
    render_prompt(&validate_file(path)?)
}

// =============================================================================
// Generation API
// =============================================================================

/// Generate a script with a caller-supplied generator.
pub fn generate_with<G: ScriptGenerator>(
    generator: G,
    raw: &RawDeploymentConfig,
) -> GenerationOutcome {
    let ctx = AppContext::new(generator, MinijinjaTemplateRenderer::new());
    generate::request(&ctx, raw)
}

/// Generate a script for a deployment file.
pub fn generate_file(path: &Path, options: &GenerateOptions) -> Result<String, AppError> {
    // Reject bad input before an API key is required.
    let config = validate_file(path)?;
    let ctx = create_context(options)?;
    generate::execute_validated(&ctx, &config)
}

/// Save a generated script as plain text.
pub fn save_script(path: &Path, script: &str, force: bool) -> Result<(), AppError> {
    write_text(path, script, force)
}
