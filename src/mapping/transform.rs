//! Value transformation that preserves keys.
//!
//! Every function here produces a mapping with exactly the input's key set
//! and hasher, and runs the transform once per entry. Entries are visited
//! in the mapping's own (unspecified) order.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns a new mapping with every value replaced by `transform(value)`.
///
/// Keys are cloned; `mapping` is left untouched.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use seqmap::mapping::map_values;
///
/// let scores = HashMap::from([("a", 1), ("b", 2)]);
/// let scaled = map_values(&scores, |score| score * 10);
///
/// assert_eq!(scaled, HashMap::from([("a", 10), ("b", 20)]));
/// assert_eq!(scores["a"], 1);
/// ```
pub fn map_values<K, V, W, S, F>(
    mapping: &HashMap<K, V, S>,
    mut transform: F,
) -> HashMap<K, W, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    F: FnMut(&V) -> W,
{
    let mut result =
        HashMap::with_capacity_and_hasher(mapping.len(), mapping.hasher().clone());
    for (key, value) in mapping {
        result.insert(key.clone(), transform(value));
    }
    result
}

/// Consuming form of [`map_values`]: keys and values are moved, not cloned.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use seqmap::mapping::into_map_values;
///
/// let names = HashMap::from([(1, String::from("ada")), (2, String::from("alan"))]);
/// let lengths = into_map_values(names, |name| name.len());
/// assert_eq!(lengths, HashMap::from([(1, 3), (2, 4)]));
/// ```
pub fn into_map_values<K, V, W, S, F>(
    mapping: HashMap<K, V, S>,
    mut transform: F,
) -> HashMap<K, W, S>
where
    K: Eq + Hash,
    S: BuildHasher + Clone,
    F: FnMut(V) -> W,
{
    let hasher = mapping.hasher().clone();
    let mut result = HashMap::with_capacity_and_hasher(mapping.len(), hasher);
    for (key, value) in mapping {
        result.insert(key, transform(value));
    }
    result
}

/// Fallible form of [`map_values`].
///
/// The first `Err` from `transform` is returned unchanged and the partially
/// built mapping is discarded.
///
/// # Errors
///
/// Returns the first error produced by `transform`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use seqmap::mapping::try_map_values;
///
/// let raw = HashMap::from([("port", "8080")]);
/// let parsed = try_map_values(&raw, |text| text.parse::<u16>());
/// assert_eq!(parsed.map(|mapping| mapping["port"]), Ok(8080));
/// ```
pub fn try_map_values<K, V, W, S, F, E>(
    mapping: &HashMap<K, V, S>,
    mut transform: F,
) -> Result<HashMap<K, W, S>, E>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
    F: FnMut(&V) -> Result<W, E>,
{
    let mut result =
        HashMap::with_capacity_and_hasher(mapping.len(), mapping.hasher().clone());
    for (key, value) in mapping {
        result.insert(key.clone(), transform(value)?);
    }
    Ok(result)
}

/// Parallel form of [`map_values`], running `transform` on rayon's global
/// pool.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use seqmap::mapping::par_map_values;
///
/// let source: HashMap<u32, u32> = (0..1000).map(|key| (key, key)).collect();
/// let squared = par_map_values(&source, |value| u64::from(*value) * u64::from(*value));
/// assert_eq!(squared.len(), 1000);
/// assert_eq!(squared[&12u32], 144);
/// ```
#[cfg(feature = "rayon")]
pub fn par_map_values<K, V, W, S, F>(mapping: &HashMap<K, V, S>, transform: F) -> HashMap<K, W, S>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Sync,
    W: Send,
    S: BuildHasher + Clone + Sync,
    F: Fn(&V) -> W + Sync,
{
    use rayon::prelude::*;

    let entries: Vec<(K, W)> = mapping
        .par_iter()
        .map(|(key, value)| (key.clone(), transform(value)))
        .collect();
    let mut result = HashMap::with_capacity_and_hasher(entries.len(), mapping.hasher().clone());
    result.extend(entries);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_values_preserves_keys() {
        let mapping = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let result = map_values(&mapping, |value| value.to_string());

        let mut keys: Vec<_> = result.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(result["b"], "2");
    }

    #[rstest]
    fn test_map_values_calls_transform_once_per_entry() {
        let calls = Cell::new(0);
        let mapping: HashMap<i32, i32> = (0..50).map(|key| (key, key)).collect();
        let result = map_values(&mapping, |value| {
            calls.set(calls.get() + 1);
            value + 1
        });

        assert_eq!(calls.get(), 50);
        assert_eq!(result.len(), 50);
    }

    #[rstest]
    fn test_map_values_on_empty_mapping() {
        let mapping: HashMap<String, i32> = HashMap::new();
        assert!(map_values(&mapping, |value| value * 2).is_empty());
    }

    #[rstest]
    fn test_into_map_values_moves_values() {
        let mapping = HashMap::from([("v", vec![1, 2, 3])]);
        let result = into_map_values(mapping, |values| values.into_iter().sum::<i32>());
        assert_eq!(result["v"], 6);
    }

    #[rstest]
    fn test_try_map_values_fails_on_bad_value() {
        let mapping = HashMap::from([("good", "1"), ("bad", "one")]);
        let result = try_map_values(&mapping, |text| text.parse::<i32>());
        assert!(result.is_err());
    }
}
