//! OpenShift image streams (`image.openshift.io/v1`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ObjectMeta, ObjectReference};
use crate::merge::is_zero;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageStream {
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ImageStreamSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageStreamSpec {
    pub lookup_policy: ImageLookupPolicy,
    #[serde(skip_serializing_if = "is_zero")]
    pub docker_image_repository: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub tags: Vec<TagReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageLookupPolicy {
    #[serde(skip_serializing_if = "is_zero")]
    pub local: bool,
}

/// TagReference is one tag of an image stream, identified by its name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagReference {
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub annotations: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub from: Option<ObjectReference>,
    #[serde(skip_serializing_if = "is_zero")]
    pub reference: bool,
    pub import_policy: TagImportPolicy,
    pub reference_policy: TagReferencePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagImportPolicy {
    #[serde(skip_serializing_if = "is_zero")]
    pub insecure: bool,
    #[serde(skip_serializing_if = "is_zero")]
    pub scheduled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagReferencePolicy {
    #[serde(rename = "type", skip_serializing_if = "is_zero")]
    pub type_: String,
}

object!(ImageStream, "image.openshift.io/v1", "ImageStream");

crate::merge_struct!(ImageStream {
    api_version,
    kind,
    metadata,
    spec,
});

crate::merge_struct!(ImageStreamSpec {
    lookup_policy,
    docker_image_repository,
    tags,
});

crate::merge_struct!(ImageLookupPolicy { local });

crate::merge_struct!(TagReference {
    name,
    annotations,
    from,
    reference,
    import_policy,
    reference_policy,
});

crate::merge_struct!(TagImportPolicy {
    insecure,
    scheduled,
});

crate::merge_struct!(TagReferencePolicy { type_ });

crate::named_element!(TagReference => name);
