pub mod generation_config;
pub mod loader;

pub use generation_config::{GenerationConfig, Settings};
pub use loader::{SETTINGS_DIR, default_settings_path, load_settings, parse_settings_content};
