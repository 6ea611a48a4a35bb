//! Mappings keyed by position: `v1`, `v2`, `v3`, ...

use crate::hash::{DefaultHashBuilder, Mapping};

/// Builds a mapping whose keys are `prefix` followed by the 1-based
/// position of each value.
///
/// Useful wherever a textual format refers to values by generated names,
/// such as a visual-format layout string naming its views `v1`, `v2`.
///
/// # Examples
///
/// ```rust
/// use seqmap::mapping::numbered_mapping;
///
/// let views = numbered_mapping("v", ["header", "body", "footer"]);
/// assert_eq!(views.len(), 3);
/// assert_eq!(views["v1"], "header");
/// assert_eq!(views["v3"], "footer");
/// ```
pub fn numbered_mapping<I>(prefix: &str, values: I) -> Mapping<String, I::Item>
where
    I: IntoIterator,
{
    let values = values.into_iter();
    let mut mapping =
        Mapping::with_capacity_and_hasher(values.size_hint().0, DefaultHashBuilder::default());
    for (index, value) in values.enumerate() {
        mapping.insert(format!("{prefix}{}", index + 1), value);
    }
    mapping
}
