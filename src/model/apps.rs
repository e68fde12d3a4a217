//! Kubernetes deployments (`apps/v1`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{IntOrString, ObjectMeta, PodTemplateSpec};
use crate::merge::is_zero;

/// Deployment is used for singleton workloads such as the console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Deployment {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: DeploymentSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentSpec {
    #[serde(skip_serializing_if = "is_zero")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "is_zero")]
    pub selector: Option<LabelSelector>,
    pub template: PodTemplateSpec,
    #[serde(skip_serializing_if = "is_zero")]
    pub strategy: Option<DeploymentUpdateStrategy>,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_ready_seconds: i32,
    #[serde(skip_serializing_if = "is_zero")]
    pub revision_history_limit: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelSelector {
    #[serde(skip_serializing_if = "is_zero")]
    pub match_labels: BTreeMap<String, String>,
}

/// DeploymentUpdateStrategy is `spec.strategy` of an `apps/v1` Deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentUpdateStrategy {
    #[serde(rename = "type", skip_serializing_if = "is_zero")]
    pub type_: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub rolling_update: Option<RollingUpdateDeployment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RollingUpdateDeployment {
    #[serde(skip_serializing_if = "is_zero")]
    pub max_unavailable: Option<IntOrString>,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_surge: Option<IntOrString>,
}

object!(Deployment, "apps/v1", "Deployment");

crate::merge_struct!(Deployment {
    api_version,
    kind,
    metadata,
    spec,
});

crate::merge_struct!(DeploymentSpec {
    replicas,
    selector,
    template,
    strategy,
    min_ready_seconds,
    revision_history_limit,
});

crate::merge_struct!(LabelSelector { match_labels });

crate::merge_struct!(DeploymentUpdateStrategy {
    type_,
    rolling_update,
});

crate::merge_struct!(RollingUpdateDeployment {
    max_unavailable,
    max_surge,
});
