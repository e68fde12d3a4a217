//! Map merge rule.

use std::collections::BTreeMap;

use super::Merge;

/// Returns the key-wise union of two maps.
///
/// A key present on both sides takes the overlay's value. Values are not
/// merged recursively: labels, annotations, selectors and resource lists are
/// flat string maps.
pub fn merge_map<K, V>(baseline: &BTreeMap<K, V>, overlay: &BTreeMap<K, V>) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    let mut merged = baseline.clone();
    merged.extend(
        overlay
            .iter()
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    merged
}

impl<K, V> Merge for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn merge(&self, overlay: &Self) -> Self {
        merge_map(self, overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_union_with_overlay_precedence() {
        let baseline = map(&[("source", "baseline"), ("baseline", "true")]);
        let overlay = map(&[("source", "overwrite"), ("overwrite", "true")]);

        let merged = merge_map(&baseline, &overlay);
        assert_eq!(
            merged,
            map(&[
                ("source", "overwrite"),
                ("baseline", "true"),
                ("overwrite", "true"),
            ])
        );
    }

    #[test]
    fn test_empty_sides() {
        let labels = map(&[("app", "rhpamcentr")]);
        assert_eq!(merge_map(&labels, &BTreeMap::new()), labels);
        assert_eq!(merge_map(&BTreeMap::new(), &labels), labels);
    }

    #[test]
    fn test_tombstone_key_is_an_ordinary_annotation() {
        let merged = merge_map(&map(&[]), &map(&[("delete", "true")]));
        assert_eq!(merged.get("delete").map(String::as_str), Some("true"));
    }
}
