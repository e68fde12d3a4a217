//! Macros for implementing the merge traits on record types.

/// Implements [`Merge`](crate::merge::Merge) for a struct field by field.
///
/// Every field must be listed: the generated struct literal fails to compile
/// otherwise, so a field added later cannot silently skip the merge.
///
/// ```
/// use kie_overlay::merge::Merge;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Probe {
///     command: Vec<String>,
///     timeout_seconds: i32,
/// }
///
/// kie_overlay::merge_struct!(Probe { command, timeout_seconds });
///
/// let baseline = Probe { command: vec!["/bin/check".into()], timeout_seconds: 2 };
/// let overlay = Probe { command: vec![], timeout_seconds: 5 };
/// assert_eq!(
///     baseline.merge(&overlay),
///     Probe { command: vec!["/bin/check".into()], timeout_seconds: 5 },
/// );
/// ```
#[macro_export]
macro_rules! merge_struct {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::merge::Merge for $ty {
            fn merge(&self, overlay: &Self) -> Self {
                Self {
                    $($field: $crate::merge::Merge::merge(&self.$field, &overlay.$field),)*
                }
            }
        }
    };
}

/// Implements [`Named`](crate::merge::Named) and an identity-keyed
/// [`Element`](crate::merge::Element) for types whose identity is a plain
/// string field.
#[macro_export]
macro_rules! named_element {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl $crate::merge::Named for $ty {
                fn name(&self) -> &str {
                    &self.$field
                }
            }

            impl $crate::merge::Element for $ty {
                fn merge_list(baseline: &[Self], overlay: &[Self]) -> Vec<Self> {
                    $crate::merge::merge_named(baseline, overlay)
                }
            }
        )+
    };
}

/// Implements a positional [`Element`](crate::merge::Element) for types
/// without an identity.
#[macro_export]
macro_rules! positional_element {
    ($($ty:ty),+ $(,)?) => {
        $(impl $crate::merge::Element for $ty {})+
    };
}
