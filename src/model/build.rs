//! OpenShift build configs (`build.openshift.io/v1`).

use serde::{Deserialize, Serialize};

use super::{EnvVar, ObjectMeta, ObjectReference};
use crate::merge::is_zero;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildConfig {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: BuildConfigSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildConfigSpec {
    #[serde(skip_serializing_if = "is_zero")]
    pub triggers: Vec<BuildTriggerPolicy>,
    #[serde(skip_serializing_if = "is_zero")]
    pub run_policy: String,
    pub source: BuildSource,
    pub strategy: BuildStrategy,
    pub output: BuildOutput,
}

/// BuildTriggerPolicy has no identity: triggers merge by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildTriggerPolicy {
    #[serde(rename = "type", skip_serializing_if = "is_zero")]
    pub type_: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub github: Option<WebHookTrigger>,
    #[serde(skip_serializing_if = "is_zero")]
    pub generic: Option<WebHookTrigger>,
    #[serde(skip_serializing_if = "is_zero")]
    pub image_change: Option<ImageChangeTrigger>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebHookTrigger {
    #[serde(skip_serializing_if = "is_zero")]
    pub secret: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub allow_env: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageChangeTrigger {
    #[serde(skip_serializing_if = "is_zero")]
    pub last_triggered_image_id: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub from: Option<ObjectReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildSource {
    #[serde(rename = "type", skip_serializing_if = "is_zero")]
    pub type_: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub git: Option<GitBuildSource>,
    #[serde(skip_serializing_if = "is_zero")]
    pub context_dir: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitBuildSource {
    #[serde(skip_serializing_if = "is_zero")]
    pub uri: String,
    #[serde(rename = "ref", skip_serializing_if = "is_zero")]
    pub ref_: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildStrategy {
    #[serde(rename = "type", skip_serializing_if = "is_zero")]
    pub type_: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub source_strategy: Option<SourceBuildStrategy>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceBuildStrategy {
    pub from: ObjectReference,
    #[serde(skip_serializing_if = "is_zero")]
    pub env: Vec<EnvVar>,
    #[serde(skip_serializing_if = "is_zero")]
    pub force_pull: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub incremental: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOutput {
    #[serde(skip_serializing_if = "is_zero")]
    pub to: Option<ObjectReference>,
}

object!(BuildConfig, "build.openshift.io/v1", "BuildConfig");

crate::merge_struct!(BuildConfig {
    api_version,
    kind,
    metadata,
    spec,
});

crate::merge_struct!(BuildConfigSpec {
    triggers,
    run_policy,
    source,
    strategy,
    output,
});

crate::merge_struct!(BuildTriggerPolicy {
    type_,
    github,
    generic,
    image_change,
});

crate::merge_struct!(WebHookTrigger { secret, allow_env });

crate::merge_struct!(ImageChangeTrigger {
    last_triggered_image_id,
    from,
});

crate::merge_struct!(BuildSource {
    type_,
    git,
    context_dir,
});

crate::merge_struct!(GitBuildSource { uri, ref_ });

crate::merge_struct!(BuildStrategy {
    type_,
    source_strategy,
});

crate::merge_struct!(SourceBuildStrategy {
    from,
    env,
    force_pull,
    incremental,
});

crate::merge_struct!(BuildOutput { to });

crate::positional_element!(BuildTriggerPolicy);
