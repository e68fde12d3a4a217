//! Services.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{IntOrString, ObjectMeta};
use crate::merge::is_zero;

/// Service exposes a set of pods under a stable name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ServiceSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceSpec {
    #[serde(rename = "type", skip_serializing_if = "is_zero")]
    pub type_: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub ports: Vec<ServicePort>,
    #[serde(skip_serializing_if = "is_zero")]
    pub selector: BTreeMap<String, String>,
    #[serde(rename = "clusterIP", skip_serializing_if = "is_zero")]
    pub cluster_ip: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub session_affinity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServicePort {
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub protocol: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub port: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub target_port: IntOrString,
}

object!(Service, "v1", "Service");

crate::merge_struct!(Service {
    api_version,
    kind,
    metadata,
    spec,
});

crate::merge_struct!(ServiceSpec {
    type_,
    ports,
    selector,
    cluster_ip,
    session_affinity,
});

crate::merge_struct!(ServicePort {
    name,
    protocol,
    port,
    target_port,
});

crate::named_element!(ServicePort => name);
