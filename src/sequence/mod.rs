//! Generic operations over ordered sequences.
//!
//! Every function here accepts any [`IntoIterator`], consumes it once in
//! iteration order, and never mutates the caller's data except
//! [`remove_indices`], whose contract is in-place removal.
//!
//! - [`find_first_matching`]: first element satisfying a predicate
//! - [`accumulate`]: running fold, one output per input element
//! - [`all_match`]: universal predicate check
//! - [`unique`]: stable de-duplication
//! - [`remove_indices`]: drop a set of positions from a vector
//!
//! [`accumulate`]: fn@accumulate
//! [`unique`]: fn@unique
//!
//! Fallible callbacks are supported by the `try_*` forms, which return the
//! callback's error as soon as it occurs.
//!
//! The lazy forms of `accumulate` and `unique` are available as iterator
//! adapters through [`SequenceExt`].
//!
//! # Examples
//!
//! ```rust
//! use seqmap::sequence::SequenceExt;
//!
//! let totals: Vec<i32> = [1, 2, 2, 3]
//!     .into_iter()
//!     .unique()
//!     .accumulate(0, |accumulator, element| accumulator + element)
//!     .collect();
//! assert_eq!(totals, vec![1, 3, 6]);
//! ```

mod accumulate;
mod find;
mod predicate;
mod remove;
mod unique;

use std::hash::Hash;

pub use accumulate::{Accumulate, accumulate, try_accumulate};
pub use find::{find_first_matching, try_find_first_matching};
pub use predicate::{all_match, try_all_match};
pub use remove::remove_indices;
pub use unique::{Unique, unique};

/// Lazy adapters for the sequence operations, available on every iterator.
pub trait SequenceExt: Iterator + Sized {
    /// Running fold that yields each partial result, not including
    /// `initial`.
    ///
    /// See [`accumulate`](fn@accumulate) for the eager form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::sequence::SequenceExt;
    ///
    /// let mut products = [2, 3, 4].into_iter().accumulate(1, |accumulator, element| accumulator * element);
    /// assert_eq!(products.next(), Some(2));
    /// assert_eq!(products.next(), Some(6));
    /// assert_eq!(products.next(), Some(24));
    /// assert_eq!(products.next(), None);
    /// ```
    fn accumulate<U, F>(self, initial: U, combine: F) -> Accumulate<Self, U, F>
    where
        U: Clone,
        F: FnMut(U, Self::Item) -> U,
    {
        Accumulate::new(self, initial, combine)
    }

    /// Yields each distinct element the first time it appears.
    ///
    /// See [`unique`](fn@unique) for the eager form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::sequence::SequenceExt;
    ///
    /// let distinct: Vec<char> = "mississippi".chars().unique().collect();
    /// assert_eq!(distinct, vec!['m', 'i', 's', 'p']);
    /// ```
    fn unique(self) -> Unique<Self>
    where
        Self::Item: Eq + Hash + Clone,
    {
        Unique::new(self)
    }
}

impl<I: Iterator> SequenceExt for I {}

static_assertions::assert_impl_all!(Unique<std::vec::IntoIter<i32>>: Send, Sync);
static_assertions::assert_impl_all!(Accumulate<std::vec::IntoIter<i32>, i64, fn(i64, i32) -> i64>: Send, Sync);
static_assertions::assert_not_impl_any!(Unique<std::vec::IntoIter<std::rc::Rc<i32>>>: Send, Sync);
