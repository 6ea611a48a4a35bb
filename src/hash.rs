//! Hasher selection shared by the sequence and mapping utilities.
//!
//! The seen-set used by [`unique`](fn@crate::sequence::unique) and the mappings
//! returned by [`build_mapping`](crate::mapping::build_mapping) are built with
//! [`DefaultHashBuilder`]. Which hasher that is depends on the enabled
//! feature flags:
//!
//! - neither `fxhash` nor `ahash`: [`std::hash::RandomState`] (SipHash)
//! - `fxhash`: [`rustc_hash::FxBuildHasher`]
//! - `ahash` (without `fxhash`): [`ahash::RandomState`]
//!
//! The faster hashers trade HashDoS resistance for speed. Only enable them
//! when keys do not come from untrusted input.

use std::collections::{HashMap, HashSet};

/// The hash builder used by every collection this crate constructs itself.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used by every collection this crate constructs itself.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used by every collection this crate constructs itself.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

/// A `HashMap` using [`DefaultHashBuilder`].
///
/// # Examples
///
/// ```rust
/// use seqmap::Mapping;
///
/// let mut mapping: Mapping<&str, i32> = Mapping::default();
/// mapping.insert("a", 1);
/// assert_eq!(mapping.get("a"), Some(&1));
/// ```
pub type Mapping<K, V> = HashMap<K, V, DefaultHashBuilder>;

/// A `HashSet` using [`DefaultHashBuilder`].
pub type Set<T> = HashSet<T, DefaultHashBuilder>;
