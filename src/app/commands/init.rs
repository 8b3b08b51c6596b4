use std::path::Path;

use crate::domain::AppError;
use crate::services::{embedded_assets, write_text};

/// Default deployment file written by `s2d init`.
pub const DEFAULT_DEPLOYMENT_FILE: &str = "s2d.toml";

/// Write the commented sample deployment file to `path`.
pub fn execute(path: &Path, force: bool) -> Result<(), AppError> {
    let sample = embedded_assets::sample_deployment_toml()?;
    write_text(path, sample, force)
}
