//! Removal of several positions from a vector at once.

use std::collections::HashSet;
use std::hash::BuildHasher;

/// Removes every element of `vector` whose position is in `indices`.
///
/// Positions refer to the vector as it was before the call, so removing
/// `{0, 1}` drops the first two elements rather than the first and third.
/// Survivors keep their relative order. Positions past the end are ignored.
///
/// This is a single retain pass, not one `Vec::remove` per index.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use seqmap::sequence::remove_indices;
///
/// let mut letters = vec!['a', 'b', 'c', 'd', 'e'];
/// remove_indices(&mut letters, &HashSet::from([0, 3, 42]));
/// assert_eq!(letters, vec!['b', 'c', 'e']);
/// ```
pub fn remove_indices<T, S>(vector: &mut Vec<T>, indices: &HashSet<usize, S>)
where
    S: BuildHasher,
{
    if indices.is_empty() {
        return;
    }
    let mut position = 0;
    vector.retain(|_| {
        let keep = !indices.contains(&position);
        position += 1;
        keep
    });
}
