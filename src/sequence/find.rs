//! Linear search for the first element satisfying a predicate.

/// Returns the first element of `sequence` for which `predicate` is true.
///
/// The predicate is evaluated left to right and the search stops at the
/// first match: no element after it is inspected or pulled from the
/// underlying iterator. Returns `None` when nothing matches, including when
/// the sequence is empty.
///
/// # Examples
///
/// ```rust
/// use seqmap::sequence::find_first_matching;
///
/// let first_even = find_first_matching([3, 5, 8, 10], |element| element % 2 == 0);
/// assert_eq!(first_even, Some(8));
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(find_first_matching(empty, |_| true), None);
/// ```
#[inline]
pub fn find_first_matching<I, P>(sequence: I, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    sequence.into_iter().find(predicate)
}

/// Fallible form of [`find_first_matching`].
///
/// The first `Err` returned by `predicate` is handed back to the caller
/// unchanged, and the search stops there.
///
/// # Errors
///
/// Returns the predicate's error if it fails before a match is found.
///
/// # Examples
///
/// ```rust
/// use seqmap::sequence::try_find_first_matching;
///
/// let parsed = try_find_first_matching(["1", "22", "333"], |text| {
///     text.parse::<u32>().map(|number| number > 10)
/// });
/// assert_eq!(parsed, Ok(Some("22")));
///
/// let failed = try_find_first_matching(["1", "x", "333"], |text| {
///     text.parse::<u32>().map(|number| number > 10)
/// });
/// assert!(failed.is_err());
/// ```
pub fn try_find_first_matching<I, P, E>(sequence: I, mut predicate: P) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    for element in sequence {
        if predicate(&element)? {
            return Ok(Some(element));
        }
    }
    Ok(None)
}
