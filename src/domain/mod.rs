pub mod configuration;
pub mod deployment;
pub mod error;
pub mod prompt;
pub mod script;

pub use configuration::{GenerationConfig, Settings};
pub use deployment::{
    DeploymentConfig, DriveLetter, FieldError, FieldErrorKind, MediaType, RawDeploymentConfig,
    StorageNodes, StorageTier, ValidationErrors,
};
pub use error::AppError;
pub use prompt::{PromptContext, TemplateRenderer};
pub use script::{DEFAULT_SCRIPT_FILE_NAME, GenerationOutcome, strip_code_fences};
