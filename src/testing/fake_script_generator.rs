use crate::ports::{GenerationError, ScriptGenerator};
use std::sync::{Arc, Mutex};

/// Deterministic generator that records every prompt it receives.
#[derive(Clone)]
pub struct FakeScriptGenerator {
    pub received_prompts: Arc<Mutex<Vec<String>>>,
    pub response: Result<String, GenerationError>,
}

impl FakeScriptGenerator {
    pub fn replying(response: impl Into<String>) -> Self {
        Self { received_prompts: Arc::new(Mutex::new(vec![])), response: Ok(response.into()) }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self { received_prompts: Arc::new(Mutex::new(vec![])), response: Err(error) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.received_prompts.lock().unwrap().clone()
    }
}

impl ScriptGenerator for FakeScriptGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.received_prompts.lock().unwrap().push(prompt.to_string());
        self.response.clone()
    }
}
