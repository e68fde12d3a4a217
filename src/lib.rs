//! # KIE Overlay
//!
//! Type-aware overlay merging of KIE operator resource trees.
//!
//! The operator renders a baseline set of resources from a template and then
//! overlays environment and user customisations on top of it. This library
//! performs that overlay: scalars take the overlay value unless it is unset,
//! maps are unioned, lists of named items are merged by name (an overlay
//! item annotated `delete: "true"` removes the baseline item), and all other
//! lists are merged by position.
//!
//! ## Modules
//!
//! - [`merge`] - The `Merge` trait and the scalar, map and list rules
//! - [`model`] - Typed resource trees (services, routes, deployment configs, ...)
//! - [`overlay`] - Per-collection entry points and whole environment merges
//! - [`resource`] - Kind-tagged resources and multi-document YAML manifests
//! - [`error`] - Errors raised at the decode boundary

pub mod error;
pub mod merge;
pub mod model;
pub mod overlay;
pub mod resource;

pub use error::{Error, Result};
pub use merge::{Directive, Element, Merge, Named, Zero};
pub use model::{Object, ObjectMeta};
pub use overlay::{
    merge_custom_object, merge_environment, merge_layers, merge_object, CustomObject,
    Environment,
};
pub use resource::{decode_resources, encode_resources, Resource};
