//! # seqmap
//!
//! Small generic utilities over sequences and key/value mappings.
//!
//! ## Overview
//!
//! Each operation is a standalone leaf function. None of them shares state
//! with another, and none mutates its input unless its contract says so.
//!
//! - **Sequences**: [`find_first_matching`], [`accumulate`], [`all_match`],
//!   [`unique`], [`remove_indices`]
//! - **Mappings**: [`merge_into`], [`build_mapping`], [`map_values`],
//!   [`numbered_mapping`]
//! - **Construction**: [`lend`]
//!
//! ## Feature Flags
//!
//! - `sequence`: sequence operations and the [`SequenceExt`] adapters
//! - `mapping`: mapping operations and [`MappingExt`]
//! - `compose`: point-of-use construction helpers
//! - `rayon`: `par_map_values`
//! - `fxhash` / `ahash`: faster [`DefaultHashBuilder`]
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqmap::prelude::*;
//!
//! assert_eq!(find_first_matching([3, 5, 8, 10], |element| element % 2 == 0), Some(8));
//! assert_eq!(accumulate(0, [1, 2, 3, 4], |accumulator, element| accumulator + element), vec![1, 3, 6, 10]);
//! assert!(all_match([2, 4, 6], |element| element % 2 == 0));
//! assert_eq!(unique([1, 2, 2, 3, 1, 4]), vec![1, 2, 3, 4]);
//!
//! let mapping = build_mapping([("a", 1), ("b", 2), ("a", 3)]);
//! assert_eq!(mapping["a"], 3);
//! assert_eq!(map_values(&mapping, |value| value * 10)["b"], 20);
//! ```
//!
//! [`find_first_matching`]: crate::sequence::find_first_matching
//! [`accumulate`]: fn@crate::sequence::accumulate
//! [`all_match`]: crate::sequence::all_match
//! [`unique`]: fn@crate::sequence::unique
//! [`remove_indices`]: crate::sequence::remove_indices
//! [`SequenceExt`]: crate::sequence::SequenceExt
//! [`merge_into`]: crate::mapping::merge_into
//! [`build_mapping`]: crate::mapping::build_mapping
//! [`map_values`]: crate::mapping::map_values
//! [`numbered_mapping`]: crate::mapping::numbered_mapping
//! [`MappingExt`]: crate::mapping::MappingExt
//! [`lend`]: crate::compose::lend

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation and extension trait of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use seqmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::hash::{DefaultHashBuilder, Mapping, Set};

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "mapping")]
    pub use crate::mapping::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

mod hash;

pub use hash::{DefaultHashBuilder, Mapping, Set};

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "mapping")]
pub mod mapping;

#[cfg(feature = "compose")]
pub mod compose;
