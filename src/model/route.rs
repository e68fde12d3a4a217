//! OpenShift routes (`route.openshift.io/v1`).

use serde::{Deserialize, Serialize};

use super::{IntOrString, ObjectMeta};
use crate::merge::is_zero;

/// Route exposes a service under an external host name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Route {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: RouteSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteSpec {
    #[serde(skip_serializing_if = "is_zero")]
    pub host: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub path: String,
    pub to: RouteTargetReference,
    #[serde(skip_serializing_if = "is_zero")]
    pub alternate_backends: Vec<RouteTargetReference>,
    #[serde(skip_serializing_if = "is_zero")]
    pub port: Option<RoutePort>,
    #[serde(skip_serializing_if = "is_zero")]
    pub tls: Option<TLSConfig>,
    #[serde(skip_serializing_if = "is_zero")]
    pub wildcard_policy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTargetReference {
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub weight: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoutePort {
    pub target_port: IntOrString,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TLSConfig {
    #[serde(skip_serializing_if = "is_zero")]
    pub termination: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub insecure_edge_termination_policy: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub certificate: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub key: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub ca_certificate: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub destination_ca_certificate: String,
}

object!(Route, "route.openshift.io/v1", "Route");

crate::merge_struct!(Route {
    api_version,
    kind,
    metadata,
    spec,
});

crate::merge_struct!(RouteSpec {
    host,
    path,
    to,
    alternate_backends,
    port,
    tls,
    wildcard_policy,
});

crate::merge_struct!(RouteTargetReference { kind, name, weight });

crate::merge_struct!(RoutePort { target_port });

crate::merge_struct!(TLSConfig {
    termination,
    insecure_edge_termination_policy,
    certificate,
    key,
    ca_certificate,
    destination_ca_certificate,
});

crate::named_element!(RouteTargetReference => name);
