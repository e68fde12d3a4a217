//! OpenShift deployment configs (`apps.openshift.io/v1`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{IntOrString, ObjectMeta, ObjectReference, PodTemplateSpec, ResourceRequirements};
use crate::merge::is_zero;

/// DeploymentConfig is the workload controller used by the KIE templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentConfig {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: DeploymentConfigSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentConfigSpec {
    pub strategy: DeploymentStrategy,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_ready_seconds: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub triggers: Vec<DeploymentTriggerPolicy>,
    #[serde(skip_serializing_if = "is_zero")]
    pub replicas: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub revision_history_limit: Option<i32>,
    #[serde(skip_serializing_if = "is_zero")]
    pub test: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub paused: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub selector: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub template: Option<PodTemplateSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentStrategy {
    #[serde(rename = "type", skip_serializing_if = "is_zero")]
    pub type_: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub rolling_params: Option<RollingDeploymentStrategyParams>,
    #[serde(skip_serializing_if = "is_zero")]
    pub recreate_params: Option<RecreateDeploymentStrategyParams>,
    pub resources: ResourceRequirements,
    #[serde(skip_serializing_if = "is_zero")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub annotations: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub active_deadline_seconds: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollingDeploymentStrategyParams {
    #[serde(skip_serializing_if = "is_zero")]
    pub update_period_seconds: Option<i64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub interval_seconds: Option<i64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub timeout_seconds: Option<i64>,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_unavailable: Option<IntOrString>,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_surge: Option<IntOrString>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecreateDeploymentStrategyParams {
    #[serde(skip_serializing_if = "is_zero")]
    pub timeout_seconds: Option<i64>,
}

/// DeploymentTriggerPolicy has no identity: triggers merge by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentTriggerPolicy {
    #[serde(rename = "type", skip_serializing_if = "is_zero")]
    pub type_: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub image_change_params: Option<DeploymentTriggerImageChangeParams>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentTriggerImageChangeParams {
    #[serde(skip_serializing_if = "is_zero")]
    pub automatic: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub container_names: Vec<String>,
    pub from: ObjectReference,
    #[serde(skip_serializing_if = "is_zero")]
    pub last_triggered_image: String,
}

object!(DeploymentConfig, "apps.openshift.io/v1", "DeploymentConfig");

crate::merge_struct!(DeploymentConfig {
    api_version,
    kind,
    metadata,
    spec,
});

crate::merge_struct!(DeploymentConfigSpec {
    strategy,
    min_ready_seconds,
    triggers,
    replicas,
    revision_history_limit,
    test,
    paused,
    selector,
    template,
});

crate::merge_struct!(DeploymentStrategy {
    type_,
    rolling_params,
    recreate_params,
    resources,
    labels,
    annotations,
    active_deadline_seconds,
});

crate::merge_struct!(RollingDeploymentStrategyParams {
    update_period_seconds,
    interval_seconds,
    timeout_seconds,
    max_unavailable,
    max_surge,
});

crate::merge_struct!(RecreateDeploymentStrategyParams { timeout_seconds });

crate::merge_struct!(DeploymentTriggerPolicy {
    type_,
    image_change_params,
});

crate::merge_struct!(DeploymentTriggerImageChangeParams {
    automatic,
    container_names,
    from,
    last_triggered_image,
});

crate::positional_element!(DeploymentTriggerPolicy);
