//! Model module - Typed resource trees handled by the overlay engine.
//!
//! Only the subset of each API type that the operator's templates set is
//! modelled. Every type implements [`Merge`]; list element types choose
//! between identity-keyed and positional list merging through
//! [`Element`](crate::merge::Element).

use crate::merge::{Merge, Named};

/// Object is a top-level resource: it has metadata, an API version and a kind.
///
/// Its identity is `metadata.name`, and an overlay object annotated
/// `delete: "true"` removes the baseline object of the same name.
pub trait Object: Named + Merge {
    const API_VERSION: &'static str;
    const KIND: &'static str;

    /// Returns the object's metadata.
    fn metadata(&self) -> &ObjectMeta;

    /// Fills in `apiVersion` and `kind` when they are unset.
    fn with_type_meta(self) -> Self;
}

macro_rules! object {
    ($ty:ident, $api_version:literal, $kind:literal) => {
        impl $crate::model::Object for $ty {
            const API_VERSION: &'static str = $api_version;
            const KIND: &'static str = $kind;

            fn metadata(&self) -> &$crate::model::ObjectMeta {
                &self.metadata
            }

            fn with_type_meta(mut self) -> Self {
                if self.api_version.is_empty() {
                    self.api_version = $api_version.to_string();
                }
                if self.kind.is_empty() {
                    self.kind = $kind.to_string();
                }
                self
            }
        }

        impl $crate::merge::Named for $ty {
            fn name(&self) -> &str {
                &self.metadata.name
            }

            fn directive(&self) -> $crate::merge::Directive<'_, Self> {
                if self.metadata.is_tombstone() {
                    $crate::merge::Directive::Delete
                } else {
                    $crate::merge::Directive::Upsert(self)
                }
            }
        }

        impl $crate::merge::Element for $ty {
            fn merge_list(baseline: &[Self], overlay: &[Self]) -> Vec<Self> {
                $crate::merge::merge_named(baseline, overlay)
            }
        }
    };
}

mod apps;
mod build;
mod deploy;
mod image;
mod meta;
mod pod;
mod rbac;
mod route;
mod secret;
mod service;
mod storage;


pub use apps::*;
pub use build::*;
pub use deploy::*;
pub use image::*;
pub use meta::*;
pub use pod::*;
pub use rbac::*;
pub use route::*;
pub use secret::*;
pub use service::*;
pub use storage::*;
