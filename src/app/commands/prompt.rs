//! Deployment prompt rendering.

use tracing::debug;

use crate::domain::prompt::DEPLOY_PROMPT_TEMPLATE;
use crate::domain::{AppError, DeploymentConfig, PromptContext, TemplateRenderer};
use crate::services::embedded_assets;

/// Render the deployment prompt for a validated configuration.
pub fn render<R: TemplateRenderer>(
    renderer: &R,
    config: &DeploymentConfig,
) -> Result<String, AppError> {
    let template = embedded_assets::prompt_template(DEPLOY_PROMPT_TEMPLATE)?;
    let context = PromptContext::from(config);
    let prompt = renderer.render(template, &context, DEPLOY_PROMPT_TEMPLATE)?;

    debug!(
        chars = prompt.len(),
        reboot = config.reboot_after_completion,
        "rendered deployment prompt"
    );
    Ok(prompt)
}
