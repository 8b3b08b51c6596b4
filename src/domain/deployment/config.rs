//! Normalized, fully-typed deployment configuration.
//!
//! Values of these types only come out of [`super::validate`], so their
//! invariants hold wherever they are used.

use std::fmt;

use serde::Serialize;

/// Media backing a storage tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaType {
    #[serde(rename = "SSD")]
    Ssd,
    #[serde(rename = "HDD")]
    Hdd,
}

impl MediaType {
    /// Parse the exact form value. Matching is case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SSD" => Some(MediaType::Ssd),
            "HDD" => Some(MediaType::Hdd),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Ssd => "SSD",
            MediaType::Hdd => "HDD",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single uppercase ASCII drive letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DriveLetter(char);

impl DriveLetter {
    /// Accepts any ASCII letter and stores its uppercase form.
    pub fn new(letter: char) -> Option<Self> {
        letter.is_ascii_alphabetic().then(|| DriveLetter(letter.to_ascii_uppercase()))
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for DriveLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, non-empty list of server names with no empty entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StorageNodes(Vec<String>);

impl StorageNodes {
    /// Split comma-separated text into trimmed server names.
    ///
    /// Returns `None` when any entry is empty after trimming.
    pub fn parse(list: &str) -> Option<Self> {
        let nodes: Vec<String> = list.split(',').map(|node| node.trim().to_string()).collect();
        if nodes.iter().any(|node| node.is_empty()) {
            return None;
        }
        Some(StorageNodes(nodes))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-separated form accepted back by [`StorageNodes::parse`].
    pub fn to_list_string(&self) -> String {
        self.0.join(",")
    }
}

impl fmt::Display for StorageNodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

/// One independently configured storage tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageTier {
    pub name: String,
    pub media_type: MediaType,
    pub resiliency_setting_name: String,
}

/// Validated Storage Spaces Direct deployment parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    pub virtual_switch_name: String,
    pub storage_nodes: StorageNodes,
    pub cluster_name: String,
    pub storage_pool_friendly_name: String,
    pub tier1: StorageTier,
    pub tier2: StorageTier,
    pub enable_deduplication: bool,
    pub cache_drive_letter: DriveLetter,
    pub capacity_drive_letter: DriveLetter,
    pub reboot_after_completion: bool,
}
