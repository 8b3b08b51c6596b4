use crate::domain::TemplateRenderer;
use crate::ports::ScriptGenerator;

/// Application context holding dependencies for command execution.
pub struct AppContext<G: ScriptGenerator, R: TemplateRenderer> {
    generator: G,
    renderer: R,
}

impl<G: ScriptGenerator, R: TemplateRenderer> AppContext<G, R> {
    /// Create a new application context.
    pub fn new(generator: G, renderer: R) -> Self {
        Self { generator, renderer }
    }

    /// Get a reference to the script generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a reference to the prompt template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
