//! Pod templates, containers, probes and volumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{IntOrString, ObjectMeta, Quantity};
use crate::merge::is_zero;

/// PodTemplateSpec describes the pods a workload controller creates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PodTemplateSpec {
    pub metadata: ObjectMeta,
    pub spec: PodSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PodSpec {
    #[serde(skip_serializing_if = "is_zero")]
    pub service_account_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub termination_grace_period_seconds: Option<i64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub node_selector: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub init_containers: Vec<Container>,
    #[serde(skip_serializing_if = "is_zero")]
    pub containers: Vec<Container>,
    #[serde(skip_serializing_if = "is_zero")]
    pub volumes: Vec<Volume>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Container {
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub image: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub image_pull_policy: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub command: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub env: Vec<EnvVar>,
    #[serde(skip_serializing_if = "is_zero")]
    pub ports: Vec<ContainerPort>,
    pub resources: ResourceRequirements,
    #[serde(skip_serializing_if = "is_zero")]
    pub volume_mounts: Vec<VolumeMount>,
    #[serde(skip_serializing_if = "is_zero")]
    pub liveness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "is_zero")]
    pub readiness_probe: Option<Probe>,
}

/// EnvVar is a container environment variable, either literal or sourced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvVar {
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub value: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub value_from: Option<EnvVarSource>,
}

impl EnvVar {
    /// Creates a literal environment variable.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        EnvVar {
            name: name.into(),
            value: value.into(),
            value_from: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvVarSource {
    #[serde(skip_serializing_if = "is_zero")]
    pub config_map_key_ref: Option<KeySelector>,
    #[serde(skip_serializing_if = "is_zero")]
    pub secret_key_ref: Option<KeySelector>,
    #[serde(skip_serializing_if = "is_zero")]
    pub field_ref: Option<ObjectFieldSelector>,
}

/// KeySelector selects a key of a ConfigMap or Secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySelector {
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectFieldSelector {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub field_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerPort {
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub container_port: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub protocol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRequirements {
    #[serde(skip_serializing_if = "is_zero")]
    pub limits: BTreeMap<String, Quantity>,
    #[serde(skip_serializing_if = "is_zero")]
    pub requests: BTreeMap<String, Quantity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VolumeMount {
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub mount_path: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub sub_path: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub read_only: bool,
}

/// Volume is a named pod volume. Exactly one source is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Volume {
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub empty_dir: Option<EmptyDirVolumeSource>,
    #[serde(skip_serializing_if = "is_zero")]
    pub secret: Option<SecretVolumeSource>,
    #[serde(skip_serializing_if = "is_zero")]
    pub config_map: Option<ConfigMapVolumeSource>,
    #[serde(skip_serializing_if = "is_zero")]
    pub persistent_volume_claim: Option<PersistentVolumeClaimVolumeSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmptyDirVolumeSource {
    #[serde(skip_serializing_if = "is_zero")]
    pub medium: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub size_limit: Option<Quantity>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecretVolumeSource {
    #[serde(skip_serializing_if = "is_zero")]
    pub secret_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub items: Vec<KeyToPath>,
    #[serde(skip_serializing_if = "is_zero")]
    pub default_mode: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigMapVolumeSource {
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub items: Vec<KeyToPath>,
    #[serde(skip_serializing_if = "is_zero")]
    pub default_mode: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyToPath {
    #[serde(skip_serializing_if = "is_zero")]
    pub key: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersistentVolumeClaimVolumeSource {
    #[serde(skip_serializing_if = "is_zero")]
    pub claim_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub read_only: bool,
}

/// Probe is a liveness or readiness check. Exactly one handler is expected
/// to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Probe {
    #[serde(skip_serializing_if = "is_zero")]
    pub exec: Option<ExecAction>,
    #[serde(skip_serializing_if = "is_zero")]
    pub http_get: Option<HTTPGetAction>,
    #[serde(skip_serializing_if = "is_zero")]
    pub tcp_socket: Option<TCPSocketAction>,
    #[serde(skip_serializing_if = "is_zero")]
    pub initial_delay_seconds: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub timeout_seconds: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub period_seconds: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub success_threshold: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub failure_threshold: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecAction {
    #[serde(skip_serializing_if = "is_zero")]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HTTPGetAction {
    #[serde(skip_serializing_if = "is_zero")]
    pub path: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub port: IntOrString,
    #[serde(skip_serializing_if = "is_zero")]
    pub host: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub scheme: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TCPSocketAction {
    #[serde(skip_serializing_if = "is_zero")]
    pub port: IntOrString,
    #[serde(skip_serializing_if = "is_zero")]
    pub host: String,
}

crate::merge_struct!(PodTemplateSpec { metadata, spec });

crate::merge_struct!(PodSpec {
    service_account_name,
    termination_grace_period_seconds,
    node_selector,
    init_containers,
    containers,
    volumes,
});

crate::merge_struct!(Container {
    name,
    image,
    image_pull_policy,
    command,
    args,
    env,
    ports,
    resources,
    volume_mounts,
    liveness_probe,
    readiness_probe,
});

crate::merge_struct!(EnvVar {
    name,
    value,
    value_from,
});

crate::merge_struct!(EnvVarSource {
    config_map_key_ref,
    secret_key_ref,
    field_ref,
});

crate::merge_struct!(KeySelector { name, key });

crate::merge_struct!(ObjectFieldSelector {
    api_version,
    field_path,
});

crate::merge_struct!(ContainerPort {
    name,
    container_port,
    protocol,
});

crate::merge_struct!(ResourceRequirements { limits, requests });

crate::merge_struct!(VolumeMount {
    name,
    mount_path,
    sub_path,
    read_only,
});

crate::merge_struct!(Volume {
    name,
    empty_dir,
    secret,
    config_map,
    persistent_volume_claim,
});

crate::merge_struct!(EmptyDirVolumeSource { medium, size_limit });

crate::merge_struct!(SecretVolumeSource {
    secret_name,
    items,
    default_mode,
});

crate::merge_struct!(ConfigMapVolumeSource {
    name,
    items,
    default_mode,
});

crate::merge_struct!(KeyToPath { key, path });

crate::merge_struct!(PersistentVolumeClaimVolumeSource {
    claim_name,
    read_only,
});

crate::merge_struct!(Probe {
    exec,
    http_get,
    tcp_socket,
    initial_delay_seconds,
    timeout_seconds,
    period_seconds,
    success_threshold,
    failure_threshold,
});

crate::merge_struct!(ExecAction { command });

crate::merge_struct!(HTTPGetAction {
    path,
    port,
    host,
    scheme,
});

crate::merge_struct!(TCPSocketAction { port, host });

crate::named_element!(
    Container => name,
    EnvVar => name,
    ContainerPort => name,
    VolumeMount => name,
    Volume => name,
);

crate::positional_element!(KeyToPath);
