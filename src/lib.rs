//! s2d-deploy: Generate Storage Spaces Direct deployment scripts from validated parameters.
//!
//! The crate validates deployment values, renders a generation prompt, and asks a
//! text-generation model for a PowerShell script. Library users can supply their own
//! [`ScriptGenerator`] through [`generate_with`].

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOptions, ValidationReport, generate_file, generate_with, init, load_deployment,
    render_prompt, render_prompt_file, save_deployment, save_script, validate_config,
    validate_file, validation_report,
};
pub use domain::{
    AppError, DEFAULT_SCRIPT_FILE_NAME, DeploymentConfig, DriveLetter, FieldError,
    FieldErrorKind, GenerationConfig, GenerationOutcome, MediaType, RawDeploymentConfig,
    StorageNodes, StorageTier, ValidationErrors, strip_code_fences,
};
pub use ports::{GenerationError, MockScriptGenerator, ScriptGenerator};
