use serde::Serialize;

use crate::domain::deployment::DeploymentConfig;

/// Variables exposed to the deployment prompt template.
///
/// Text values are interpolated verbatim; storage nodes are joined with `", "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptContext {
    pub virtual_switch_name: String,
    pub storage_nodes: String,
    pub cluster_name: String,
    pub storage_pool_friendly_name: String,
    pub storage_tier1_name: String,
    pub storage_tier1_media_type: String,
    pub storage_tier1_resiliency_setting_name: String,
    pub storage_tier2_name: String,
    pub storage_tier2_media_type: String,
    pub storage_tier2_resiliency_setting_name: String,
    pub enable_deduplication: bool,
    pub cache_drive_letter: String,
    pub capacity_drive_letter: String,
    pub reboot_after_completion: bool,
}

impl From<&DeploymentConfig> for PromptContext {
    fn from(config: &DeploymentConfig) -> Self {
        Self {
            virtual_switch_name: config.virtual_switch_name.clone(),
            storage_nodes: config.storage_nodes.to_string(),
            cluster_name: config.cluster_name.clone(),
            storage_pool_friendly_name: config.storage_pool_friendly_name.clone(),
            storage_tier1_name: config.tier1.name.clone(),
            storage_tier1_media_type: config.tier1.media_type.to_string(),
            storage_tier1_resiliency_setting_name: config.tier1.resiliency_setting_name.clone(),
            storage_tier2_name: config.tier2.name.clone(),
            storage_tier2_media_type: config.tier2.media_type.to_string(),
            storage_tier2_resiliency_setting_name: config.tier2.resiliency_setting_name.clone(),
            enable_deduplication: config.enable_deduplication,
            cache_drive_letter: config.cache_drive_letter.to_string(),
            capacity_drive_letter: config.capacity_drive_letter.to_string(),
            reboot_after_completion: config.reboot_after_completion,
        }
    }
}
