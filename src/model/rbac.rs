//! Role bindings.

use serde::{Deserialize, Serialize};

use super::ObjectMeta;
use crate::merge::is_zero;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoleBinding {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(skip_serializing_if = "is_zero")]
    pub subjects: Vec<Subject>,
    pub role_ref: RoleRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subject {
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub api_group: String,
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub namespace: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoleRef {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_group: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
}

object!(RoleBinding, "rbac.authorization.k8s.io/v1", "RoleBinding");

crate::merge_struct!(RoleBinding {
    api_version,
    kind,
    metadata,
    subjects,
    role_ref,
});

crate::merge_struct!(Subject {
    kind,
    api_group,
    name,
    namespace,
});

crate::merge_struct!(RoleRef {
    api_group,
    kind,
    name,
});

crate::named_element!(Subject => name);
