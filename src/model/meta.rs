//! Object metadata, references and shared scalar types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::merge::{is_zero, merge_scalar, Merge, Zero};

/// Annotation that marks an overlay object for deletion.
pub const TOMBSTONE_ANNOTATION: &str = "delete";

/// Value of [`TOMBSTONE_ANNOTATION`] that requests deletion.
pub const TOMBSTONE_VALUE: &str = "true";

/// ObjectMeta is the subset of object metadata the overlay engine merges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub namespace: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub annotations: BTreeMap<String, String>,
}

crate::merge_struct!(ObjectMeta {
    name,
    namespace,
    labels,
    annotations,
});

impl ObjectMeta {
    /// Creates metadata with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        ObjectMeta {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns true if the object carries the deletion annotation.
    pub fn is_tombstone(&self) -> bool {
        self.annotations
            .get(TOMBSTONE_ANNOTATION)
            .is_some_and(|value| value == TOMBSTONE_VALUE)
    }

    /// Sets the deletion annotation.
    pub fn mark_deleted(&mut self) {
        self.annotations
            .insert(TOMBSTONE_ANNOTATION.to_string(), TOMBSTONE_VALUE.to_string());
    }
}

/// ObjectReference points at another object, possibly in another namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectReference {
    #[serde(skip_serializing_if = "is_zero")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub namespace: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub api_version: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub field_path: String,
}

crate::merge_struct!(ObjectReference {
    kind,
    namespace,
    name,
    api_version,
    field_path,
});

/// LocalObjectReference points at an object in the same namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalObjectReference {
    #[serde(skip_serializing_if = "is_zero")]
    pub name: String,
}

crate::merge_struct!(LocalObjectReference { name });

crate::named_element!(
    ObjectReference => name,
    LocalObjectReference => name,
);

/// IntOrString holds either a port number or a port name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i32),
    String(String),
}

impl Default for IntOrString {
    fn default() -> Self {
        IntOrString::Int(0)
    }
}

impl Zero for IntOrString {
    fn is_zero(&self) -> bool {
        match self {
            IntOrString::Int(i) => *i == 0,
            IntOrString::String(s) => s.is_empty(),
        }
    }
}

impl Merge for IntOrString {
    fn merge(&self, overlay: &Self) -> Self {
        merge_scalar(self, overlay)
    }
}

impl From<i32> for IntOrString {
    fn from(value: i32) -> Self {
        IntOrString::Int(value)
    }
}

impl From<&str> for IntOrString {
    fn from(value: &str) -> Self {
        IntOrString::String(value.to_string())
    }
}

/// Quantity is a resource amount such as `512Mi` or `2`, kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(pub String);

impl Quantity {
    pub fn new(value: impl Into<String>) -> Self {
        Quantity(value.into())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Templates write bare numbers (`cpu: 1`) as often as strings.
impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Int(i64),
            Float(f64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => Quantity(text),
            Repr::Int(i) => Quantity(i.to_string()),
            Repr::Float(f) => Quantity(f.to_string()),
        })
    }
}

impl Zero for Quantity {
    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

impl Merge for Quantity {
    fn merge(&self, overlay: &Self) -> Self {
        merge_scalar(self, overlay)
    }
}
