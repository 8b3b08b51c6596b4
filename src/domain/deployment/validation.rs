//! Normalization and field-level validation of deployment input.
//!
//! Drive letters are upper-cased first, then every rule runs and all
//! failures are collected in field declaration order.

use std::fmt;

use serde::Serialize;

use super::{
    DeploymentConfig, DriveLetter, MediaType, RawDeploymentConfig, StorageNodes, StorageTier,
};

/// Camel-case field paths as they appear in deployment files.
pub mod field {
    pub const VIRTUAL_SWITCH_NAME: &str = "virtualSwitchName";
    pub const STORAGE_NODES: &str = "storageNodes";
    pub const CLUSTER_NAME: &str = "clusterName";
    pub const STORAGE_POOL_FRIENDLY_NAME: &str = "storagePoolFriendlyName";
    pub const STORAGE_TIER1_NAME: &str = "storageTier1Name";
    pub const STORAGE_TIER1_MEDIA_TYPE: &str = "storageTier1MediaType";
    pub const STORAGE_TIER1_RESILIENCY_SETTING_NAME: &str = "storageTier1ResiliencySettingName";
    pub const STORAGE_TIER2_NAME: &str = "storageTier2Name";
    pub const STORAGE_TIER2_MEDIA_TYPE: &str = "storageTier2MediaType";
    pub const STORAGE_TIER2_RESILIENCY_SETTING_NAME: &str = "storageTier2ResiliencySettingName";
    pub const CACHE_DRIVE_LETTER: &str = "cacheDriveLetter";
    pub const CAPACITY_DRIVE_LETTER: &str = "capacityDriveLetter";
    pub const ENABLE_DEDUPLICATION: &str = "enableDeduplication";
    pub const REBOOT_AFTER_COMPLETION: &str = "rebootAfterCompletion";
}

/// Which rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    MissingField,
    InvalidEnum,
    InvalidFormat,
    Conflict,
}

/// A single violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    #[serde(skip)]
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self { field: field.into(), kind, message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violated rule for one submission, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when any entry names `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|error| error.field == field)
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        ValidationErrors(errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Upper-case both drive letters. Nothing else is touched.
pub fn normalize(raw: &RawDeploymentConfig) -> RawDeploymentConfig {
    RawDeploymentConfig {
        cache_drive_letter: raw.cache_drive_letter.as_ref().map(|letter| letter.to_uppercase()),
        capacity_drive_letter: raw
            .capacity_drive_letter
            .as_ref()
            .map(|letter| letter.to_uppercase()),
        ..raw.clone()
    }
}

/// Normalize `raw`, then check every field.
pub fn validate(raw: &RawDeploymentConfig) -> Result<DeploymentConfig, ValidationErrors> {
    let raw = normalize(raw);
    let mut checks = FieldChecks::default();

    let virtual_switch_name = checks.required(
        field::VIRTUAL_SWITCH_NAME,
        raw.virtual_switch_name.as_deref(),
        "Virtual switch name is required.",
    );
    let storage_nodes = checks.storage_nodes(raw.storage_nodes.as_deref());
    let cluster_name = checks.required(
        field::CLUSTER_NAME,
        raw.cluster_name.as_deref(),
        "Cluster name is required.",
    );
    let storage_pool_friendly_name = checks.required(
        field::STORAGE_POOL_FRIENDLY_NAME,
        raw.storage_pool_friendly_name.as_deref(),
        "Storage pool friendly name is required.",
    );
    let tier1 = checks.tier(
        TierFields {
            number: 1,
            name: field::STORAGE_TIER1_NAME,
            media_type: field::STORAGE_TIER1_MEDIA_TYPE,
            resiliency: field::STORAGE_TIER1_RESILIENCY_SETTING_NAME,
        },
        raw.storage_tier1_name.as_deref(),
        raw.storage_tier1_media_type.as_deref(),
        raw.storage_tier1_resiliency_setting_name.as_deref(),
    );
    let tier2 = checks.tier(
        TierFields {
            number: 2,
            name: field::STORAGE_TIER2_NAME,
            media_type: field::STORAGE_TIER2_MEDIA_TYPE,
            resiliency: field::STORAGE_TIER2_RESILIENCY_SETTING_NAME,
        },
        raw.storage_tier2_name.as_deref(),
        raw.storage_tier2_media_type.as_deref(),
        raw.storage_tier2_resiliency_setting_name.as_deref(),
    );
    let cache_drive_letter =
        checks.drive_letter(field::CACHE_DRIVE_LETTER, "Cache", raw.cache_drive_letter.as_deref());
    let capacity_drive_letter = checks.drive_letter(
        field::CAPACITY_DRIVE_LETTER,
        "Capacity",
        raw.capacity_drive_letter.as_deref(),
    );

    if let (Some(cache), Some(capacity)) = (cache_drive_letter, capacity_drive_letter)
        && cache == capacity
    {
        checks.push(
            field::CAPACITY_DRIVE_LETTER,
            FieldErrorKind::Conflict,
            "Capacity drive letter must differ from cache drive letter.",
        );
    }

    match (
        virtual_switch_name,
        storage_nodes,
        cluster_name,
        storage_pool_friendly_name,
        tier1,
        tier2,
        cache_drive_letter,
        capacity_drive_letter,
    ) {
        (
            Some(virtual_switch_name),
            Some(storage_nodes),
            Some(cluster_name),
            Some(storage_pool_friendly_name),
            Some(tier1),
            Some(tier2),
            Some(cache_drive_letter),
            Some(capacity_drive_letter),
        ) if checks.errors.is_empty() => Ok(DeploymentConfig {
            virtual_switch_name,
            storage_nodes,
            cluster_name,
            storage_pool_friendly_name,
            tier1,
            tier2,
            enable_deduplication: raw.enable_deduplication.unwrap_or(false),
            cache_drive_letter,
            capacity_drive_letter,
            reboot_after_completion: raw.reboot_after_completion.unwrap_or(false),
        }),
        _ => Err(ValidationErrors(checks.errors)),
    }
}

struct TierFields {
    number: u8,
    name: &'static str,
    media_type: &'static str,
    resiliency: &'static str,
}

#[derive(Default)]
struct FieldChecks {
    errors: Vec<FieldError>,
}

impl FieldChecks {
    fn push(&mut self, field: &str, kind: FieldErrorKind, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, kind, message));
    }

    fn required(&mut self, field: &str, value: Option<&str>, message: &str) -> Option<String> {
        match value {
            Some(value) if !value.is_empty() => Some(value.to_string()),
            _ => {
                self.push(field, FieldErrorKind::MissingField, message);
                None
            }
        }
    }

    fn media_type(&mut self, field: &str, value: Option<&str>, tier: u8) -> Option<MediaType> {
        let parsed = value.and_then(MediaType::parse);
        if parsed.is_none() {
            self.push(
                field,
                FieldErrorKind::InvalidEnum,
                format!("Invalid media type for tier {}.", tier),
            );
        }
        parsed
    }

    fn tier(
        &mut self,
        fields: TierFields,
        name: Option<&str>,
        media_type: Option<&str>,
        resiliency: Option<&str>,
    ) -> Option<StorageTier> {
        let name = self.required(
            fields.name,
            name,
            &format!("Storage tier {} name is required.", fields.number),
        );
        let media_type = self.media_type(fields.media_type, media_type, fields.number);
        let resiliency_setting_name = self.required(
            fields.resiliency,
            resiliency,
            &format!("Resiliency setting for tier {} is required.", fields.number),
        );
        Some(StorageTier {
            name: name?,
            media_type: media_type?,
            resiliency_setting_name: resiliency_setting_name?,
        })
    }

    fn storage_nodes(&mut self, value: Option<&str>) -> Option<StorageNodes> {
        let list = self.required(field::STORAGE_NODES, value, "Storage nodes are required.")?;
        let nodes = StorageNodes::parse(&list);
        if nodes.is_none() {
            self.push(
                field::STORAGE_NODES,
                FieldErrorKind::InvalidFormat,
                "Storage nodes must be a comma-separated list of non-empty server names.",
            );
        }
        nodes
    }

    /// Length and letter rules are separate, so both may fire for one value.
    fn drive_letter(
        &mut self,
        field: &str,
        label: &str,
        value: Option<&str>,
    ) -> Option<DriveLetter> {
        let value = value.unwrap_or_default();
        let mut chars = value.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(letter), None) => Some(letter),
            _ => None,
        };

        if single.is_none() {
            self.push(
                field,
                FieldErrorKind::InvalidFormat,
                format!("{} drive letter must be a single character.", label),
            );
        }

        let letter = single.and_then(DriveLetter::new);
        if letter.is_none() {
            self.push(
                field,
                FieldErrorKind::InvalidFormat,
                format!("{} drive letter must be an uppercase letter (A-Z).", label),
            );
        }
        letter
    }
}
