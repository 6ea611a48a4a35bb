//! In-place union of key/value pairs, and the constructor derived from it.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use crate::hash::{DefaultHashBuilder, Mapping};

/// Inserts every `(key, value)` pair of `pairs` into `receiver`.
///
/// Pairs are processed in iteration order and the last write wins, both
/// against keys already in `receiver` and against keys repeated within
/// `pairs`. The receiver is mutated in place; nothing is returned.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use seqmap::mapping::merge_into;
///
/// let mut settings = HashMap::from([("color", "red"), ("size", "small")]);
/// merge_into(&mut settings, [("size", "large"), ("shape", "round"), ("size", "medium")]);
///
/// assert_eq!(settings.len(), 3);
/// assert_eq!(settings["color"], "red");
/// assert_eq!(settings["size"], "medium");
/// assert_eq!(settings["shape"], "round");
/// ```
pub fn merge_into<K, V, S, I>(receiver: &mut HashMap<K, V, S>, pairs: I)
where
    K: Eq + Hash,
    S: BuildHasher,
    I: IntoIterator<Item = (K, V)>,
{
    let pairs = pairs.into_iter();
    receiver.reserve(pairs.size_hint().0);
    for (key, value) in pairs {
        receiver.insert(key, value);
    }
}

/// Builds a fresh [`Mapping`] from a sequence of pairs.
///
/// Equivalent to applying [`merge_into`] to an empty mapping, so duplicate
/// keys keep their last value.
///
/// # Examples
///
/// ```rust
/// use seqmap::mapping::build_mapping;
///
/// let mapping = build_mapping([("a", 1), ("b", 2), ("a", 3)]);
/// assert_eq!(mapping.len(), 2);
/// assert_eq!(mapping["a"], 3);
/// assert_eq!(mapping["b"], 2);
/// ```
pub fn build_mapping<K, V, I>(pairs: I) -> Mapping<K, V>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    build_mapping_with_hasher(pairs, DefaultHashBuilder::default())
}

/// Builds a fresh mapping from a sequence of pairs using `hasher`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use std::hash::RandomState;
/// use seqmap::mapping::build_mapping_with_hasher;
///
/// let mapping: HashMap<u8, char, RandomState> =
///     build_mapping_with_hasher([(1, 'x'), (1, 'y')], RandomState::new());
/// assert_eq!(mapping[&1u8], 'y');
/// ```
pub fn build_mapping_with_hasher<K, V, S, I>(pairs: I, hasher: S) -> HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
    I: IntoIterator<Item = (K, V)>,
{
    let mut mapping = HashMap::with_hasher(hasher);
    merge_into(&mut mapping, pairs);
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_merge_into_overwrites_existing_keys() {
        let mut receiver = HashMap::from([("a", 1), ("b", 2)]);
        merge_into(&mut receiver, [("b", 20), ("c", 30)]);

        assert_eq!(receiver, HashMap::from([("a", 1), ("b", 20), ("c", 30)]));
    }

    #[rstest]
    fn test_merge_into_last_duplicate_in_pairs_wins() {
        let mut receiver: HashMap<&str, i32> = HashMap::new();
        merge_into(&mut receiver, [("k", 1), ("k", 2), ("k", 3)]);

        assert_eq!(receiver.len(), 1);
        assert_eq!(receiver["k"], 3);
    }

    #[rstest]
    fn test_merge_into_with_empty_pairs_is_noop() {
        let mut receiver = HashMap::from([(1, 'a')]);
        merge_into(&mut receiver, std::iter::empty());

        assert_eq!(receiver, HashMap::from([(1, 'a')]));
    }

    #[rstest]
    fn test_build_mapping_from_empty_sequence() {
        let mapping: Mapping<String, i32> = build_mapping(Vec::new());
        assert!(mapping.is_empty());
    }

    #[rstest]
    fn test_build_mapping_last_write_wins() {
        let mapping = build_mapping([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(mapping.get("a"), Some(&3));
        assert_eq!(mapping.get("b"), Some(&2));
    }
}
