mod fake_script_generator;

pub use fake_script_generator::FakeScriptGenerator;
