use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

/// Prompt template embedded under `assets/prompts/`.
pub fn prompt_template(name: &str) -> Result<&'static str, AppError> {
    asset_text(&format!("prompts/{}", name))
}

/// Commented sample deployment file written by `s2d init`.
pub fn sample_deployment_toml() -> Result<&'static str, AppError> {
    asset_text("deployment/s2d.toml")
}

fn asset_text(path: &str) -> Result<&'static str, AppError> {
    ASSETS_DIR
        .get_file(path)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::config_error(format!("Missing embedded asset: {}", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawDeploymentConfig;
    use crate::domain::prompt::DEPLOY_PROMPT_TEMPLATE;

    #[test]
    fn deployment_prompt_is_embedded() {
        let template = prompt_template(DEPLOY_PROMPT_TEMPLATE).unwrap();
        assert!(template.contains("{% if reboot_after_completion"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        assert!(prompt_template("missing.j2").is_err());
    }

    #[test]
    fn sample_deployment_matches_form_defaults() {
        let raw: RawDeploymentConfig = toml::from_str(sample_deployment_toml().unwrap()).unwrap();
        assert_eq!(raw, RawDeploymentConfig::form_defaults());
    }
}
