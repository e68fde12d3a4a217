//! Persistent volume claims.

use serde::{Deserialize, Serialize};

use super::{ObjectMeta, ResourceRequirements};
use crate::merge::is_zero;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistentVolumeClaim {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: PersistentVolumeClaimSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistentVolumeClaimSpec {
    #[serde(skip_serializing_if = "is_zero")]
    pub access_modes: Vec<String>,
    pub resources: ResourceRequirements,
    #[serde(skip_serializing_if = "is_zero")]
    pub storage_class_name: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub volume_name: String,
}

object!(PersistentVolumeClaim, "v1", "PersistentVolumeClaim");

crate::merge_struct!(PersistentVolumeClaim {
    api_version,
    kind,
    metadata,
    spec,
});

crate::merge_struct!(PersistentVolumeClaimSpec {
    access_modes,
    resources,
    storage_class_name,
    volume_name,
});
