use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::deployment::validate;
use crate::domain::{AppError, DeploymentConfig, RawDeploymentConfig, ValidationErrors};

/// Machine-readable validation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    /// Normalized values, present when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RawDeploymentConfig>,
    /// Ordered `{ field, message }` entries, present when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

/// Normalize and validate raw deployment input.
pub fn execute(raw: &RawDeploymentConfig) -> Result<DeploymentConfig, AppError> {
    checked(raw).map_err(AppError::Validation)
}

/// Validate and fold the result into a [`ValidationReport`].
pub fn report(raw: &RawDeploymentConfig) -> ValidationReport {
    match checked(raw) {
        Ok(config) => ValidationReport {
            valid: true,
            config: Some(RawDeploymentConfig::from(&config)),
            errors: None,
        },
        Err(errors) => ValidationReport { valid: false, config: None, errors: Some(errors) },
    }
}

fn checked(raw: &RawDeploymentConfig) -> Result<DeploymentConfig, ValidationErrors> {
    let result = validate(raw);
    match &result {
        Ok(config) => debug!(
            nodes = config.storage_nodes.as_slice().len(),
            "deployment configuration is valid"
        ),
        Err(errors) => warn!(count = errors.len(), "deployment configuration rejected"),
    }
    result
}
