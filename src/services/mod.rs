pub mod deployment_filesystem;
pub mod embedded_assets;
mod gemini_client_http;
mod minijinja_renderer;

pub use deployment_filesystem::{
    DeploymentFormat, load_deployment_file, write_deployment_file, write_text,
};
pub use gemini_client_http::{API_KEY_ENV_VARS, HttpGeminiClient};
pub use minijinja_renderer::MinijinjaTemplateRenderer;
