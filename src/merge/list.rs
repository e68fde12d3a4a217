//! List merge strategies.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use super::Merge;

/// Directive is what an overlay list element asks of the merged list.
#[derive(Debug, PartialEq, Eq)]
pub enum Directive<'a, T> {
    /// Merge into the baseline element with the same identity, or add.
    Upsert(&'a T),
    /// Remove the baseline element with the same identity.
    Delete,
}

impl<T> Clone for Directive<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Directive<'_, T> {}

/// Named is implemented by list elements with a stable identity.
pub trait Named: Sized {
    /// Returns the identity used to match baseline and overlay elements.
    fn name(&self) -> &str;

    /// Decodes what this element asks of the merged list when it appears on
    /// the overlay side.
    fn directive(&self) -> Directive<'_, Self> {
        Directive::Upsert(self)
    }
}

/// Merges two lists whose elements carry an identity.
///
/// Baseline elements keep their order: each one is dropped if the overlay
/// deletes its identity, merged with the overlay element of the same name,
/// or kept unchanged. Overlay elements whose identity does not occur in the
/// baseline are then appended in overlay order, except deletions, which have
/// nothing to remove.
///
/// The first overlay element of a given name decides what happens to
/// baseline elements of that name.
pub fn merge_named<T: Named + Merge>(baseline: &[T], overlay: &[T]) -> Vec<T> {
    let mut index: HashMap<&str, Directive<'_, T>> = HashMap::with_capacity(overlay.len());
    for item in overlay {
        index.entry(item.name()).or_insert_with(|| item.directive());
    }

    let mut merged = Vec::with_capacity(baseline.len() + overlay.len());
    for item in baseline {
        match index.get(item.name()) {
            Some(Directive::Delete) => {
                trace!(name = item.name(), "dropping deleted element");
            }
            Some(Directive::Upsert(patch)) => merged.push(item.merge(patch)),
            None => merged.push(item.clone()),
        }
    }

    let existing: HashSet<&str> = baseline.iter().map(Named::name).collect();
    for item in overlay {
        if existing.contains(item.name()) {
            continue;
        }
        match item.directive() {
            Directive::Delete => {
                trace!(name = item.name(), "ignoring deletion of absent element");
            }
            Directive::Upsert(addition) => {
                trace!(name = item.name(), "appending overlay element");
                merged.push(addition.clone());
            }
        }
    }
    merged
}

/// Merges two lists element by element.
///
/// Elements at the same index are merged; the longer side contributes its
/// surplus unchanged. An overlay can extend a baseline list but never
/// truncate it.
pub fn merge_positional<T: Merge>(baseline: &[T], overlay: &[T]) -> Vec<T> {
    let mut merged: Vec<T> = baseline
        .iter()
        .zip(overlay)
        .map(|(baseline, overlay)| baseline.merge(overlay))
        .collect();
    let shared = merged.len();
    merged.extend(baseline.iter().skip(shared).cloned());
    merged.extend(overlay.iter().skip(shared).cloned());
    merged
}
