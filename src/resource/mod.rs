//! Resource module - Runtime-typed resources at the decode boundary.
//!
//! Manifests mix resources of several kinds in one YAML stream. A
//! [`Resource`] holds any modelled kind, selected by the document's `kind`
//! field, and can be regrouped into a [`CustomObject`] for typed merging.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::merge::Merge;
use crate::model::{
    BuildConfig, Deployment, DeploymentConfig, ImageStream, Object, ObjectMeta,
    PersistentVolumeClaim, RoleBinding, Route, Secret, Service, ServiceAccount,
};
use crate::overlay::CustomObject;

#[cfg(test)]
mod resource_test;

macro_rules! resource_kinds {
    ($($variant:ident => $field:ident),* $(,)?) => {
        /// Resource is one top-level object of any modelled kind.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        #[serde(untagged)]
        pub enum Resource {
            $($variant($variant),)*
        }

        impl Resource {
            /// Returns the kind of the wrapped object.
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Resource::$variant(_) => <$variant as Object>::KIND,)*
                }
            }

            /// Returns the metadata of the wrapped object.
            pub fn metadata(&self) -> &ObjectMeta {
                match self {
                    $(Resource::$variant(object) => object.metadata(),)*
                }
            }

            /// Merges an overlay of the same kind onto this resource.
            ///
            /// Returns [`Error::KindMismatch`] when the kinds differ.
            pub fn merge(&self, overlay: &Resource) -> Result<Resource> {
                match (self, overlay) {
                    $(
                        (Resource::$variant(baseline), Resource::$variant(overlay)) => {
                            Ok(Resource::$variant(baseline.merge(overlay)))
                        }
                    )*
                    _ => Err(Error::kind_mismatch(self.kind(), overlay.kind())),
                }
            }

            /// Decodes a resource from a generic YAML value, using its `kind`.
            pub fn from_value(value: serde_yaml::Value) -> Result<Resource> {
                let kind = value
                    .get("kind")
                    .and_then(serde_yaml::Value::as_str)
                    .ok_or(Error::MissingKind)?
                    .to_string();
                match kind.as_str() {
                    $(
                        k if k == <$variant as Object>::KIND => {
                            Ok(Resource::$variant(serde_yaml::from_value(value)?))
                        }
                    )*
                    _ => Err(Error::UnknownKind(kind)),
                }
            }
        }

        $(
            impl From<$variant> for Resource {
                fn from(object: $variant) -> Self {
                    Resource::$variant(object.with_type_meta())
                }
            }
        )*

        impl CustomObject {
            /// Groups resources by kind, keeping their order within each kind.
            pub fn from_resources(resources: impl IntoIterator<Item = Resource>) -> Self {
                let mut object = CustomObject::default();
                for resource in resources {
                    match resource {
                        $(Resource::$variant(r) => object.$field.push(r),)*
                    }
                }
                object
            }

            /// Flattens the object back into a list of resources.
            ///
            /// Kinds are emitted in field order; `apiVersion` and `kind` are
            /// filled in where unset.
            pub fn into_resources(self) -> Vec<Resource> {
                let mut resources = Vec::with_capacity(self.len());
                $(resources.extend(self.$field.into_iter().map(Resource::from));)*
                resources
            }
        }
    };
}

resource_kinds! {
    PersistentVolumeClaim => persistent_volume_claims,
    ServiceAccount => service_accounts,
    Secret => secrets,
    RoleBinding => role_bindings,
    DeploymentConfig => deployment_configs,
    Deployment => deployments,
    BuildConfig => build_configs,
    ImageStream => image_streams,
    Service => services,
    Route => routes,
}

impl Resource {
    /// Returns the resource name.
    pub fn name(&self) -> &str {
        &self.metadata().name
    }

    /// Returns true if the resource is a deletion marker.
    pub fn is_tombstone(&self) -> bool {
        self.metadata().is_tombstone()
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_yaml::Value::deserialize(deserializer)?;
        Resource::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Decodes a multi-document YAML stream. Empty documents are skipped.
pub fn decode_resources(yaml: &str) -> Result<Vec<Resource>> {
    let mut resources = Vec::new();
    for document in serde_yaml::Deserializer::from_str(yaml) {
        let value = serde_yaml::Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }
        let resource = Resource::from_value(value)?;
        trace!(kind = resource.kind(), name = resource.name(), "decoded resource");
        resources.push(resource);
    }
    Ok(resources)
}

/// Encodes resources as a multi-document YAML stream.
pub fn encode_resources(resources: &[Resource]) -> Result<String> {
    let mut out = String::new();
    for (i, resource) in resources.iter().enumerate() {
        if i > 0 {
            out.push_str("---\n");
        }
        out.push_str(&serde_yaml::to_string(resource)?);
    }
    Ok(out)
}
