//! Shared testing utilities for s2d CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Deployment values matching the form defaults.
pub const DEFAULT_DEPLOYMENT: &str = r#"virtualSwitchName = "ExternalSwitch"
storageNodes = "S2DNode1,S2DNode2"
clusterName = "S2DCluster"
storagePoolFriendlyName = "S2DPool"
storageTier1Name = "Performance"
storageTier1MediaType = "SSD"
storageTier1ResiliencySettingName = "Mirror"
storageTier2Name = "Capacity"
storageTier2MediaType = "HDD"
storageTier2ResiliencySettingName = "Parity"
enableDeduplication = false
cacheDriveLetter = "c"
capacityDriveLetter = "d"
rebootAfterCompletion = false
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `s2d` binary within the work directory.
    ///
    /// API key variables are cleared so tests never reach a real endpoint.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for the compiled `s2d` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("s2d").expect("Failed to locate s2d binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env_remove("GEMINI_API_KEY")
            .env_remove("GOOGLE_API_KEY")
            .env_remove("S2D_LOG");
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the default deployment with one `key = value` line replaced.
    pub fn write_deployment_with(&self, relative: &str, key: &str, value: &str) -> PathBuf {
        let content = DEFAULT_DEPLOYMENT
            .lines()
            .map(|line| {
                if line.starts_with(&format!("{} =", key)) {
                    format!("{} = {}", key, value)
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        self.write_file(relative, &content)
    }

    /// Write the default deployment file.
    pub fn write_default_deployment(&self) -> PathBuf {
        self.write_file("s2d.toml", DEFAULT_DEPLOYMENT)
    }

    /// Point the settings file at a custom API base URL.
    pub fn write_settings(&self, api_url: &str, model: &str) -> PathBuf {
        let content = format!(
            "[generation]\napi_url = \"{}\"\nmodel = \"{}\"\ntimeout_secs = 5\n",
            api_url, model
        );
        self.write_file(".s2d/config.toml", &content)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }
}
