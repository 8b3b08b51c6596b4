//! Filesystem access for deployment files and generated scripts.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{AppError, RawDeploymentConfig};

/// Deployment file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentFormat {
    Toml,
    Yaml,
    Json,
}

impl DeploymentFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(DeploymentFormat::Toml),
            "yml" | "yaml" => Ok(DeploymentFormat::Yaml),
            "json" => Ok(DeploymentFormat::Json),
            _ => Err(AppError::config_error(format!(
                "Unsupported deployment file '{}': expected .toml, .yml, .yaml, or .json",
                path.display()
            ))),
        }
    }
}

/// Read raw deployment values from a TOML, YAML, or JSON file.
pub fn load_deployment_file(path: &Path) -> Result<RawDeploymentConfig, AppError> {
    let format = DeploymentFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, "loading deployment file");
    parse_deployment(&content, format).map_err(|details| AppError::ParseError {
        what: path.display().to_string(),
        details,
    })
}

/// Parse raw deployment values from string content.
pub fn parse_deployment(
    content: &str,
    format: DeploymentFormat,
) -> Result<RawDeploymentConfig, String> {
    match format {
        DeploymentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        DeploymentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        DeploymentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Serialize raw deployment values as TOML and write them to `path`.
pub fn write_deployment_file(
    path: &Path,
    raw: &RawDeploymentConfig,
    force: bool,
) -> Result<(), AppError> {
    let content = toml::to_string(raw).map_err(|e| {
        AppError::config_error(format!("Failed to serialize deployment file: {}", e))
    })?;
    write_text(path, &content, force)
}

/// Write `content` to `path` exactly as given.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_text(path: &Path, content: &str, force: bool) -> Result<(), AppError> {
    if path.exists() && !force {
        return Err(AppError::OutputExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    info!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn format_follows_extension() {
        let format = |name: &str| DeploymentFormat::from_path(Path::new(name));

        assert_eq!(format("a.toml").unwrap(), DeploymentFormat::Toml);
        assert_eq!(format("a.YML").unwrap(), DeploymentFormat::Yaml);
        assert_eq!(format("a.yaml").unwrap(), DeploymentFormat::Yaml);
        assert_eq!(format("a.json").unwrap(), DeploymentFormat::Json);
        assert!(format("a.ini").is_err());
        assert!(format("noext").is_err());
    }

    #[test]
    fn loads_yaml_and_json() {
        let yaml = parse_deployment(
            "clusterName: Cluster1\ncacheDriveLetter: c\nenableDeduplication: true\n",
            DeploymentFormat::Yaml,
        )
        .unwrap();
        assert_eq!(yaml.cluster_name.as_deref(), Some("Cluster1"));
        assert_eq!(yaml.enable_deduplication, Some(true));

        let json =
            parse_deployment(r#"{"storageNodes": "Node1,Node2"}"#, DeploymentFormat::Json).unwrap();
        assert_eq!(json.storage_nodes.as_deref(), Some("Node1,Node2"));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_deployment_file(&path).unwrap_err();
        assert!(matches!(err, AppError::ParseError { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn written_deployment_file_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("s2d.toml");
        let raw = RawDeploymentConfig::form_defaults();

        write_deployment_file(&path, &raw, false).unwrap();
        assert_eq!(load_deployment_file(&path).unwrap(), raw);
    }

    #[test]
    fn write_text_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Deploy-S2D.ps1");
        fs::write(&path, "old").unwrap();

        let err = write_text(&path, "new", false).unwrap_err();
        assert!(matches!(err, AppError::OutputExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        write_text(&path, "new", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
