//! Settings file loading.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::configuration::Settings;
use crate::domain::AppError;

/// Settings directory, relative to the working directory.
pub const SETTINGS_DIR: &str = ".s2d";

/// Default settings file path under `root`.
pub fn default_settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_DIR).join("config.toml")
}

/// Load settings from an explicit path, or from `.s2d/config.toml` under `root`.
///
/// A missing default file yields defaults; a missing explicit file is an error.
pub fn load_settings(root: &Path, explicit: Option<&Path>) -> Result<Settings, AppError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (default_settings_path(root), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if required {
                return Err(AppError::SettingsMissing(path));
            }
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(err) => return Err(err.into()),
    };

    debug!(path = %path.display(), "loading settings");
    parse_settings_content(&content).map_err(|err| match err {
        AppError::ParseError { details, .. } => {
            AppError::ParseError { what: path.display().to_string(), details }
        }
        other => other,
    })
}

/// Parse settings from string content.
pub fn parse_settings_content(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content).map_err(|e| AppError::ParseError {
        what: "settings".to_string(),
        details: e.to_string(),
    })?;
    settings.validate()?;
    Ok(settings)
}
