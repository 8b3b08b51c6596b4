//! Validate, render, generate, and clean up a deployment script.

use tracing::{info, warn};

use super::{prompt, validate};
use crate::app::AppContext;
use crate::domain::{
    AppError, DeploymentConfig, GenerationOutcome, RawDeploymentConfig, TemplateRenderer,
    strip_code_fences,
};
use crate::ports::ScriptGenerator;

/// Run the whole flow and return the cleaned script.
///
/// Validation failures return before the generator is called.
pub fn execute<G, R>(
    ctx: &AppContext<G, R>,
    raw: &RawDeploymentConfig,
) -> Result<String, AppError>
where
    G: ScriptGenerator,
    R: TemplateRenderer,
{
    let config = validate::execute(raw)?;
    execute_validated(ctx, &config)
}

/// Render, generate, and clean up for an already validated configuration.
pub fn execute_validated<G, R>(
    ctx: &AppContext<G, R>,
    config: &DeploymentConfig,
) -> Result<String, AppError>
where
    G: ScriptGenerator,
    R: TemplateRenderer,
{
    let prompt = prompt::render(ctx.renderer(), config)?;

    info!(cluster = %config.cluster_name, "requesting deployment script");
    let response = ctx.generator().generate(&prompt).map_err(|err| {
        warn!(error = %err, "generation call failed");
        AppError::from(err)
    })?;

    let script = strip_code_fences(&response);
    if script.is_empty() {
        warn!("generation returned no usable text");
        return Err(AppError::EmptyGenerationResult);
    }

    info!(chars = script.len(), "deployment script generated");
    Ok(script)
}

/// Run the flow and fold any failure into the result contract.
pub fn request<G, R>(ctx: &AppContext<G, R>, raw: &RawDeploymentConfig) -> GenerationOutcome
where
    G: ScriptGenerator,
    R: TemplateRenderer,
{
    execute(ctx, raw).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::GenerationError;
    use crate::services::MinijinjaTemplateRenderer;
    use crate::testing::FakeScriptGenerator;

    fn context(
        generator: FakeScriptGenerator,
    ) -> AppContext<FakeScriptGenerator, MinijinjaTemplateRenderer> {
        AppContext::new(generator, MinijinjaTemplateRenderer::new())
    }

    #[test]
    fn returns_fence_stripped_script() {
        let generator = FakeScriptGenerator::replying("```powershell\nNew-Cluster\n```\n");
        let ctx = context(generator.clone());

        let script = execute(&ctx, &RawDeploymentConfig::form_defaults()).unwrap();

        assert_eq!(script, "New-Cluster");
        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Cluster Name: S2DCluster"));
    }

    #[test]
    fn invalid_input_never_reaches_generator() {
        let generator = FakeScriptGenerator::replying("unused");
        let ctx = context(generator.clone());
        let mut raw = RawDeploymentConfig::form_defaults();
        raw.cluster_name = Some(String::new());

        let outcome = request(&ctx, &raw);

        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("clusterName: Cluster name is required."));
        assert!(generator.prompts().is_empty());
    }

    #[test]
    fn empty_response_is_reported() {
        let ctx = context(FakeScriptGenerator::replying("```powershell\n```"));

        let outcome = request(&ctx, &RawDeploymentConfig::form_defaults());

        assert_eq!(
            outcome,
            GenerationOutcome::failed("Failed to generate script: Empty response from AI.")
        );
    }

    #[test]
    fn generator_failure_message_is_surfaced() {
        let ctx = context(FakeScriptGenerator::failing(GenerationError::Transport(
            "operation timed out".into(),
        )));

        let outcome = request(&ctx, &RawDeploymentConfig::form_defaults());

        assert!(!outcome.success);
        assert_eq!(
            outcome.error.as_deref(),
            Some("Failed to generate script: HTTP request failed: operation timed out")
        );
    }

    #[test]
    fn validated_config_goes_straight_to_generator() {
        let generator = FakeScriptGenerator::replying("```\nGet-StorageTier\n```");
        let ctx = context(generator.clone());
        let config = validate::execute(&RawDeploymentConfig::form_defaults()).unwrap();

        let script = execute_validated(&ctx, &config).unwrap();

        assert_eq!(script, "Get-StorageTier");
        assert_eq!(generator.prompts().len(), 1);
        assert!(generator.prompts()[0].contains("Storage Pool Friendly Name: S2DPool"));
    }

    #[test]
    fn success_outcome_carries_script() {
        let ctx = context(FakeScriptGenerator::replying("Get-ClusterNode"));
        let outcome = request(&ctx, &RawDeploymentConfig::form_defaults());
        assert_eq!(outcome, GenerationOutcome::succeeded("Get-ClusterNode"));
    }
}
