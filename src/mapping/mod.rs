//! Generic operations over key/value mappings.
//!
//! Mappings are [`std::collections::HashMap`]s with any [`BuildHasher`].
//! Functions that build a mapping from scratch use
//! [`DefaultHashBuilder`](crate::DefaultHashBuilder); functions that derive
//! one mapping from another keep the source's hasher.
//!
//! - [`merge_into`]: in-place union, last write wins
//! - [`build_mapping`]: fresh mapping from pairs
//! - [`map_values`]: transform every value, keys unchanged
//! - [`numbered_mapping`]: key values by position (`v1`, `v2`, ...)
//!
//! # Examples
//!
//! ```rust
//! use seqmap::mapping::{MappingExt, build_mapping};
//!
//! let mut inventory = build_mapping([("apples", 3), ("pears", 1)]);
//! inventory.merge([("pears", 5)]);
//!
//! let doubled = inventory.map_values(|count| count * 2);
//! assert_eq!(doubled["apples"], 6);
//! assert_eq!(doubled["pears"], 10);
//! ```

mod merge;
mod numbered;
mod transform;

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

pub use merge::{build_mapping, build_mapping_with_hasher, merge_into};
pub use numbered::numbered_mapping;
#[cfg(feature = "rayon")]
pub use transform::par_map_values;
pub use transform::{into_map_values, map_values, try_map_values};

/// Method forms of the mapping operations.
pub trait MappingExt<K, V> {
    /// The mapping type produced by [`MappingExt::map_values`].
    type Mapped<W>;

    /// Inserts every pair, last write wins. See [`merge_into`].
    fn merge<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>;

    /// Transforms every value, keeping keys. See [`map_values`].
    fn map_values<W, F>(&self, transform: F) -> Self::Mapped<W>
    where
        F: FnMut(&V) -> W;
}

impl<K, V, S> MappingExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Mapped<W> = HashMap<K, W, S>;

    #[inline]
    fn merge<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        merge_into(self, pairs);
    }

    #[inline]
    fn map_values<W, F>(&self, transform: F) -> Self::Mapped<W>
    where
        F: FnMut(&V) -> W,
    {
        map_values(self, transform)
    }
}
