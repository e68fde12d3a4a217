//! Scalar merge rule.

use std::collections::BTreeMap;

use super::{Element, Merge};

/// Zero reports whether a value is its type's "unset" value.
///
/// An overlay field holding the zero value is treated as not specified.
pub trait Zero {
    /// Returns true if this is the zero value.
    fn is_zero(&self) -> bool;
}

/// Returns true if `value` is zero. Usable as a serde `skip_serializing_if`.
pub fn is_zero<T: Zero>(value: &T) -> bool {
    value.is_zero()
}

/// Returns `overlay` unless it is zero, in which case `baseline` is kept.
pub fn merge_scalar<T: Zero + Clone>(baseline: &T, overlay: &T) -> T {
    if overlay.is_zero() {
        baseline.clone()
    } else {
        overlay.clone()
    }
}

macro_rules! scalar {
    ($($ty:ty => |$v:ident| $zero:expr),+ $(,)?) => {
        $(
            impl Zero for $ty {
                fn is_zero(&self) -> bool {
                    let $v = self;
                    $zero
                }
            }

            impl Merge for $ty {
                fn merge(&self, overlay: &Self) -> Self {
                    merge_scalar(self, overlay)
                }
            }

            impl Element for $ty {}
        )+
    };
}

scalar! {
    String => |v| v.is_empty(),
    bool => |v| !*v,
    i32 => |v| *v == 0,
    i64 => |v| *v == 0,
    u16 => |v| *v == 0,
    u32 => |v| *v == 0,
    f64 => |v| *v == 0.0,
}

impl<T> Zero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> Zero for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Zero for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_overlay_keeps_baseline() {
        assert_eq!(merge_scalar(&"Recreate".to_string(), &String::new()), "Recreate");
        assert_eq!(merge_scalar(&3_i32, &0), 3);
        assert!(merge_scalar(&true, &false));
    }

    #[test]
    fn test_non_zero_overlay_wins() {
        assert_eq!(
            merge_scalar(&"Recreate".to_string(), &"Rolling".to_string()),
            "Rolling"
        );
        assert_eq!(merge_scalar(&3_i32, &1), 1);
        assert!(merge_scalar(&false, &true));
        assert_eq!(merge_scalar(&0.5_f64, &1.5), 1.5);
    }

    #[test]
    fn test_zero_baseline_adopts_overlay() {
        assert_eq!(merge_scalar(&0_i64, &30), 30);
        assert_eq!(merge_scalar(&String::new(), &"TCP".to_string()), "TCP");
    }

    #[test]
    fn test_containers_are_zero_when_empty() {
        assert!(is_zero(&Vec::<String>::new()));
        assert!(!is_zero(&vec![1_i32]));
        assert!(is_zero(&BTreeMap::<String, String>::new()));
        assert!(is_zero(&None::<i32>));
        assert!(!is_zero(&Some(0_i32)));
    }
}
