pub mod config;
pub mod raw;
pub mod validation;

pub use config::{DeploymentConfig, DriveLetter, MediaType, StorageNodes, StorageTier};
pub use raw::RawDeploymentConfig;
pub use validation::{FieldError, FieldErrorKind, ValidationErrors, field, normalize, validate};
