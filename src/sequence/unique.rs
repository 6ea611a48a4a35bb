//! Stable de-duplication.
//!
//! Elements are kept in order of first occurrence. A seen-set keyed by
//! `Eq + Hash` records what has already been emitted, so the whole pass is
//! O(n) expected time.

use std::hash::Hash;
use std::iter::FusedIterator;

use crate::hash::{DefaultHashBuilder, Set};

/// Lazy de-duplicating adapter.
///
/// Created by [`SequenceExt::unique`](super::SequenceExt::unique). Yields
/// each distinct element the first time it appears.
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Unique<I: Iterator> {
    iterator: I,
    seen: Set<I::Item>,
}

impl<I> Unique<I>
where
    I: Iterator,
{
    pub(crate) fn new(iterator: I) -> Self {
        Self {
            iterator,
            seen: Set::with_hasher(DefaultHashBuilder::default()),
        }
    }
}

impl<I> Iterator for Unique<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let seen = &mut self.seen;
        self.iterator.find(|element| {
            if seen.contains(element) {
                false
            } else {
                seen.insert(element.clone());
                true
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iterator.size_hint();
        // At least one fresh element remains if the input is non-empty and
        // nothing has been seen yet.
        let lower = usize::from(lower > 0 && self.seen.is_empty());
        (lower, upper)
    }
}

impl<I> Clone for Unique<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iterator: self.iterator.clone(),
            seen: self.seen.clone(),
        }
    }
}

impl<I> FusedIterator for Unique<I>
where
    I: FusedIterator,
    I::Item: Eq + Hash + Clone,
{
}

impl<I> std::fmt::Debug for Unique<I>
where
    I: Iterator + std::fmt::Debug,
    I::Item: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Unique")
            .field("iterator", &self.iterator)
            .field("seen", &self.seen)
            .finish()
    }
}

/// Returns the distinct elements of `sequence` in order of first occurrence.
///
/// This is not a sort: the relative order of the surviving elements is the
/// order in which each one first appeared. The result is idempotent,
/// `unique(unique(s)) == unique(s)`.
///
/// # Examples
///
/// ```rust
/// use seqmap::sequence::unique;
///
/// assert_eq!(unique([1, 2, 2, 3, 1, 4]), vec![1, 2, 3, 4]);
/// assert_eq!(unique(["b", "a", "b"]), vec!["b", "a"]);
/// assert!(unique(Vec::<i32>::new()).is_empty());
/// ```
pub fn unique<I>(sequence: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    Unique::new(sequence.into_iter()).collect()
}
