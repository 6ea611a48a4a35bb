//! Running fold: one partial result per input element.
//!
//! Unlike [`Iterator::fold`], which only returns the final value, a running
//! fold emits every intermediate accumulator. The seed itself is never
//! emitted, so the output always has exactly as many elements as the input:
//!
//! ```text
//! output[0] = combine(initial,     input[0])
//! output[i] = combine(output[i-1], input[i])
//! ```

use std::iter::FusedIterator;

/// Lazy running-fold adapter.
///
/// Created by [`SequenceExt::accumulate`](super::SequenceExt::accumulate).
/// Each call to `next` combines the current accumulator with the next
/// element of the underlying iterator and yields a clone of the result.
#[derive(Clone)]
#[must_use = "iterator adapters are lazy and do nothing unless consumed"]
pub struct Accumulate<I, U, F> {
    iterator: I,
    accumulator: Option<U>,
    combine: F,
}

impl<I, U, F> Accumulate<I, U, F> {
    pub(crate) const fn new(iterator: I, initial: U, combine: F) -> Self {
        Self {
            iterator,
            accumulator: Some(initial),
            combine,
        }
    }
}

impl<I, U, F> Iterator for Accumulate<I, U, F>
where
    I: Iterator,
    U: Clone,
    F: FnMut(U, I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.iterator.next()?;
        // Only `None` while `combine` is running; a panic there leaves it so.
        let previous = self.accumulator.take()?;
        let current = (self.combine)(previous, element);
        self.accumulator = Some(current.clone());
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.accumulator.is_some() {
            self.iterator.size_hint()
        } else {
            (0, Some(0))
        }
    }
}

impl<I, U, F> ExactSizeIterator for Accumulate<I, U, F>
where
    I: ExactSizeIterator,
    U: Clone,
    F: FnMut(U, I::Item) -> U,
{
}

impl<I, U, F> FusedIterator for Accumulate<I, U, F>
where
    I: FusedIterator,
    U: Clone,
    F: FnMut(U, I::Item) -> U,
{
}

impl<I: std::fmt::Debug, U: std::fmt::Debug, F> std::fmt::Debug for Accumulate<I, U, F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Accumulate")
            .field("iterator", &self.iterator)
            .field("accumulator", &self.accumulator)
            .finish_non_exhaustive()
    }
}

/// Returns the running totals of folding `sequence` with `combine`, starting
/// from `initial`.
///
/// The output has the same length as the input and does not contain
/// `initial`. Empty input yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use seqmap::sequence::accumulate;
///
/// let running_sum = accumulate(0, [1, 2, 3, 4], |accumulator, element| accumulator + element);
/// assert_eq!(running_sum, vec![1, 3, 6, 10]);
///
/// let words = accumulate(String::new(), ["a", "b", "c"], |accumulator, element| {
///     accumulator + element
/// });
/// assert_eq!(words, vec!["a", "ab", "abc"]);
/// ```
pub fn accumulate<I, U, F>(initial: U, sequence: I, combine: F) -> Vec<U>
where
    I: IntoIterator,
    U: Clone,
    F: FnMut(U, I::Item) -> U,
{
    Accumulate::new(sequence.into_iter(), initial, combine).collect()
}

/// Fallible form of [`accumulate`].
///
/// Stops at the first `Err` from `combine` and returns it unchanged; no
/// partial output is kept.
///
/// # Errors
///
/// Returns the first error produced by `combine`.
///
/// # Examples
///
/// ```rust
/// use seqmap::sequence::try_accumulate;
///
/// let checked = try_accumulate(0u8, [100u8, 100, 100], |accumulator, element| {
///     accumulator.checked_add(element).ok_or("overflow")
/// });
/// assert_eq!(checked, Err("overflow"));
/// ```
pub fn try_accumulate<I, U, F, E>(initial: U, sequence: I, mut combine: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    U: Clone,
    F: FnMut(U, I::Item) -> Result<U, E>,
{
    let mut totals = Vec::new();
    let mut accumulator = initial;
    for element in sequence {
        accumulator = combine(accumulator, element)?;
        totals.push(accumulator.clone());
    }
    Ok(totals)
}
