//! Secrets and service accounts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{LocalObjectReference, ObjectMeta, ObjectReference};
use crate::merge::is_zero;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Secret {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(rename = "type", skip_serializing_if = "is_zero")]
    pub type_: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub data: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub string_data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceAccount {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(skip_serializing_if = "is_zero")]
    pub secrets: Vec<ObjectReference>,
    #[serde(skip_serializing_if = "is_zero")]
    pub image_pull_secrets: Vec<LocalObjectReference>,
}

object!(Secret, "v1", "Secret");
object!(ServiceAccount, "v1", "ServiceAccount");

crate::merge_struct!(Secret {
    api_version,
    kind,
    metadata,
    type_,
    data,
    string_data,
});

crate::merge_struct!(ServiceAccount {
    api_version,
    kind,
    metadata,
    secrets,
    image_pull_secrets,
});
