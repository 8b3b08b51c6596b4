mod script_generator;

pub use script_generator::{GenerationError, MockScriptGenerator, ScriptGenerator};
