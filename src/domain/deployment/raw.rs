//! Untrusted deployment input as supplied by a file or the interactive form.

use serde::{Deserialize, Serialize};

use super::DeploymentConfig;

/// Raw field values keyed by their camelCase form names.
///
/// Every field is optional here; the validator decides what is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawDeploymentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_switch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_nodes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_pool_friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_tier1_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_tier1_media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_tier1_resiliency_setting_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_tier2_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_tier2_media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_tier2_resiliency_setting_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_deduplication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_drive_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_drive_letter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reboot_after_completion: Option<bool>,
}

impl RawDeploymentConfig {
    /// Values pre-filled by the deployment form.
    pub fn form_defaults() -> Self {
        Self {
            virtual_switch_name: Some("ExternalSwitch".to_string()),
            storage_nodes: Some("S2DNode1,S2DNode2".to_string()),
            cluster_name: Some("S2DCluster".to_string()),
            storage_pool_friendly_name: Some("S2DPool".to_string()),
            storage_tier1_name: Some("Performance".to_string()),
            storage_tier1_media_type: Some("SSD".to_string()),
            storage_tier1_resiliency_setting_name: Some("Mirror".to_string()),
            storage_tier2_name: Some("Capacity".to_string()),
            storage_tier2_media_type: Some("HDD".to_string()),
            storage_tier2_resiliency_setting_name: Some("Parity".to_string()),
            enable_deduplication: Some(false),
            cache_drive_letter: Some("C".to_string()),
            capacity_drive_letter: Some("D".to_string()),
            reboot_after_completion: Some(false),
        }
    }
}

impl From<&DeploymentConfig> for RawDeploymentConfig {
    fn from(config: &DeploymentConfig) -> Self {
        Self {
            virtual_switch_name: Some(config.virtual_switch_name.clone()),
            storage_nodes: Some(config.storage_nodes.to_list_string()),
            cluster_name: Some(config.cluster_name.clone()),
            storage_pool_friendly_name: Some(config.storage_pool_friendly_name.clone()),
            storage_tier1_name: Some(config.tier1.name.clone()),
            storage_tier1_media_type: Some(config.tier1.media_type.to_string()),
            storage_tier1_resiliency_setting_name: Some(
                config.tier1.resiliency_setting_name.clone(),
            ),
            storage_tier2_name: Some(config.tier2.name.clone()),
            storage_tier2_media_type: Some(config.tier2.media_type.to_string()),
            storage_tier2_resiliency_setting_name: Some(
                config.tier2.resiliency_setting_name.clone(),
            ),
            enable_deduplication: Some(config.enable_deduplication),
            cache_drive_letter: Some(config.cache_drive_letter.to_string()),
            capacity_drive_letter: Some(config.capacity_drive_letter.to_string()),
            reboot_after_completion: Some(config.reboot_after_completion),
        }
    }
}
