use std::collections::BTreeMap;

/// Merges two identifier-keyed maps into one namespace.
///
/// Keys present in both maps take the value from `later`. The result holds
/// the union of keys. A rediscovered package and a different package that
/// happens to share an identifier are not told apart.
pub fn merge_maps<K: Ord, V>(earlier: BTreeMap<K, V>, later: BTreeMap<K, V>) -> BTreeMap<K, V> {
    let mut merged = earlier;
    merged.extend(later);
    merged
}

/// Keys of `later` that already exist in `earlier`, in key order.
pub fn overlapping_keys<K: Ord + Clone, V>(earlier: &BTreeMap<K, V>, later: &BTreeMap<K, V>) -> Vec<K> {
    later
        .keys()
        .filter(|k| earlier.contains_key(*k))
        .cloned()
        .collect()
}
