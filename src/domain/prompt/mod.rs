pub mod context;
pub mod template;

pub use context::PromptContext;
pub use template::TemplateRenderer;

/// Name of the embedded deployment prompt template.
pub const DEPLOY_PROMPT_TEMPLATE: &str = "deploy_s2d.j2";
