use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, PromptContext, TemplateRenderer};

/// Template renderer using Minijinja.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, AppError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(template, context).map_err(|err| template_render_error(template_name, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::PromptRender(format!("{}: {}", template_name, err))
}
