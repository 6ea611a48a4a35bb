//! Universal predicate check.

use super::find::{find_first_matching, try_find_first_matching};

/// Returns `true` if every element of `sequence` satisfies `predicate`.
///
/// Defined as "no counter-example exists": the scan stops at the first
/// element for which the predicate is false. An empty sequence is vacuously
/// `true`.
///
/// # Examples
///
/// ```rust
/// use seqmap::sequence::all_match;
///
/// let is_even = |element: &i32| element % 2 == 0;
/// assert!(all_match([2, 4, 6], is_even));
/// assert!(!all_match([2, 3, 6], is_even));
/// assert!(all_match(Vec::<i32>::new(), is_even));
/// ```
#[inline]
pub fn all_match<I, P>(sequence: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    find_first_matching(sequence, |element| !predicate(element)).is_none()
}

/// Fallible form of [`all_match`].
///
/// Stops at the first element that fails the predicate (returning
/// `Ok(false)`) or at the first `Err`, whichever comes first.
///
/// # Errors
///
/// Returns the predicate's error if it fails before a counter-example is
/// found.
pub fn try_all_match<I, P, E>(sequence: I, mut predicate: P) -> Result<bool, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    let counter_example = try_find_first_matching(sequence, |element| predicate(element).map(|holds| !holds))?;
    Ok(counter_example.is_none())
}
