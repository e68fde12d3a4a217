//! Merge module - Type-aware overlay merge of resource trees.
//!
//! A merge combines a *baseline* tree with a sparse *overlay* tree of the same
//! type and returns a new, independently owned tree. The rules bottom out at
//! two leaves:
//!
//! - scalars: the overlay wins unless it holds its type's zero value
//!   ([`merge_scalar`]);
//! - maps: key-wise union, the overlay wins on shared keys ([`merge_map`]).
//!
//! Optional sub-records are adopted from whichever side has one and recursed
//! into when both do. Lists dispatch on their element type through
//! [`Element`]: elements with an identity ([`Named`]) are reconciled by name
//! with tombstone support ([`merge_named`]), everything else is merged by
//! position ([`merge_positional`]).
//!
//! Record types implement [`Merge`] with [`merge_struct!`](crate::merge_struct).

mod list;
mod macros;
mod map;
mod scalar;


pub use list::*;
pub use map::*;
pub use scalar::*;

/// Merge combines a baseline value with an overlay of the same type.
pub trait Merge: Clone {
    /// Returns `self` with `overlay` applied on top of it.
    fn merge(&self, overlay: &Self) -> Self;
}

/// Element selects the list merge strategy for a type stored in a `Vec`.
///
/// The default is positional. Types with an identity override
/// [`Element::merge_list`] with [`merge_named`], usually through
/// [`named_element!`](crate::named_element).
pub trait Element: Merge {
    /// Merges two lists of this element type.
    fn merge_list(baseline: &[Self], overlay: &[Self]) -> Vec<Self> {
        merge_positional(baseline, overlay)
    }
}

impl<T: Merge> Merge for Option<T> {
    fn merge(&self, overlay: &Self) -> Self {
        match (self, overlay) {
            (Some(baseline), Some(overlay)) => Some(baseline.merge(overlay)),
            (Some(baseline), None) => Some(baseline.clone()),
            (None, overlay) => overlay.clone(),
        }
    }
}

impl<T: Element> Merge for Vec<T> {
    fn merge(&self, overlay: &Self) -> Self {
        T::merge_list(self, overlay)
    }
}

impl<T: Merge> Merge for Box<T> {
    fn merge(&self, overlay: &Self) -> Self {
        Box::new(self.as_ref().merge(overlay.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_keeps_baseline_when_overlay_absent() {
        let baseline = Some("openshift".to_string());
        assert_eq!(baseline.merge(&None), Some("openshift".to_string()));
    }

    #[test]
    fn test_option_adopts_overlay_when_baseline_absent() {
        let overlay = Some(30_i32);
        assert_eq!(None.merge(&overlay), Some(30));
    }

    #[test]
    fn test_option_recurses_when_both_present() {
        assert_eq!(Some(10_i32).merge(&Some(0)), Some(10));
        assert_eq!(Some(10_i32).merge(&Some(20)), Some(20));
    }

    #[test]
    fn test_scalar_vec_is_positional() {
        let baseline = vec!["/bin/probe".to_string(), "-c".to_string(), "x".to_string()];
        let overlay = vec!["/bin/other".to_string()];
        assert_eq!(
            baseline.merge(&overlay),
            vec!["/bin/other".to_string(), "-c".to_string(), "x".to_string()]
        );
    }
}
