#![cfg(feature = "sequence")]
//! Property-based tests for the sequence operations.
//!
//! Each law is checked against a naive reference computation over arbitrary
//! vectors, including the empty vector.

use std::collections::HashSet;

use proptest::prelude::*;
use seqmap::sequence::{SequenceExt, accumulate, all_match, find_first_matching, remove_indices, unique};

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20..20i32, 0..64)
}

fn arbitrary_divisor() -> impl Strategy<Value = i32> {
    1..6i32
}

// =============================================================================
// find_first_matching: result is the match at the smallest index
// =============================================================================

proptest! {
    #[test]
    fn prop_find_first_returns_smallest_matching_index(
        elements in arbitrary_elements(),
        divisor in arbitrary_divisor()
    ) {
        let predicate = |element: &i32| element % divisor == 0;
        let expected_index = (0..elements.len()).find(|&index| predicate(&elements[index]));

        let found = find_first_matching(elements.clone(), predicate);

        prop_assert_eq!(found, expected_index.map(|index| elements[index]));
    }
}

proptest! {
    #[test]
    fn prop_find_first_evaluates_only_prefix(
        elements in arbitrary_elements(),
        divisor in arbitrary_divisor()
    ) {
        let mut evaluated = 0usize;
        let found = find_first_matching(elements.iter(), |element| {
            evaluated += 1;
            *element % divisor == 0
        });

        match found {
            Some(_) => {
                let position = elements.iter().position(|element| element % divisor == 0);
                prop_assert_eq!(Some(evaluated - 1), position);
            }
            None => prop_assert_eq!(evaluated, elements.len()),
        }
    }
}

// =============================================================================
// accumulate: length parity and the recurrence output[i] = f(output[i-1], input[i])
// =============================================================================

proptest! {
    #[test]
    fn prop_accumulate_preserves_length(elements in arbitrary_elements(), initial in -100..100i64) {
        let totals = accumulate(initial, elements.iter().copied(), |accumulator, element| {
            accumulator + i64::from(element)
        });
        prop_assert_eq!(totals.len(), elements.len());
    }
}

proptest! {
    #[test]
    fn prop_accumulate_satisfies_recurrence(elements in arbitrary_elements(), initial in -100..100i64) {
        let combine =
            |accumulator: i64, element: i32| accumulator.wrapping_mul(3).wrapping_sub(i64::from(element));
        let totals = accumulate(initial, elements.iter().copied(), combine);

        for (index, element) in elements.iter().enumerate() {
            let previous = if index == 0 { initial } else { totals[index - 1] };
            prop_assert_eq!(totals[index], combine(previous, *element));
        }
    }
}

proptest! {
    #[test]
    fn prop_accumulate_last_equals_fold(elements in arbitrary_elements()) {
        let totals = accumulate(0i64, elements.iter().copied(), |accumulator, element| {
            accumulator + i64::from(element)
        });
        let folded = elements.iter().fold(0i64, |accumulator, element| accumulator + i64::from(*element));

        prop_assert_eq!(totals.last().copied().unwrap_or(0), folded);
    }
}

proptest! {
    #[test]
    fn prop_accumulate_adapter_agrees_with_eager_form(elements in arbitrary_elements()) {
        let lazy: Vec<i32> = elements.iter().copied().accumulate(i32::MIN, i32::max).collect();
        let eager = accumulate(i32::MIN, elements, i32::max);
        prop_assert_eq!(lazy, eager);
    }
}

// =============================================================================
// all_match: all_match(s, p) == !exists x in s: !p(x)
// =============================================================================

proptest! {
    #[test]
    fn prop_all_match_is_negated_exists(
        elements in arbitrary_elements(),
        divisor in arbitrary_divisor()
    ) {
        let result = all_match(elements.iter(), |element| *element % divisor == 0);
        let counter_example_exists = elements.iter().any(|element| element % divisor != 0);

        prop_assert_eq!(result, !counter_example_exists);
    }
}

proptest! {
    #[test]
    fn prop_all_match_agrees_with_find_first(
        elements in arbitrary_elements(),
        divisor in arbitrary_divisor()
    ) {
        let result = all_match(elements.iter(), |element| *element % divisor == 0);
        let counter_example = find_first_matching(elements.iter(), |element| *element % divisor != 0);

        prop_assert_eq!(result, counter_example.is_none());
    }
}

// =============================================================================
// unique: distinct, first-occurrence order, idempotent
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_contains_each_distinct_value_once(elements in arbitrary_elements()) {
        let result = unique(elements.iter().copied());

        let distinct_input: HashSet<i32> = elements.iter().copied().collect();
        let distinct_output: HashSet<i32> = result.iter().copied().collect();

        prop_assert_eq!(result.len(), distinct_output.len());
        prop_assert_eq!(distinct_output, distinct_input);
    }
}

proptest! {
    #[test]
    fn prop_unique_preserves_first_occurrence_order(elements in arbitrary_elements()) {
        let result = unique(elements.iter().copied());

        let first_positions: Vec<usize> = result
            .iter()
            .filter_map(|value| elements.iter().position(|element| element == value))
            .collect();

        prop_assert!(first_positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

proptest! {
    #[test]
    fn prop_unique_is_idempotent(elements in arbitrary_elements()) {
        let once = unique(elements);
        let twice = unique(once.clone());
        prop_assert_eq!(twice, once);
    }
}

proptest! {
    #[test]
    fn prop_unique_adapter_agrees_with_eager_form(elements in arbitrary_elements()) {
        let lazy: Vec<i32> = elements.iter().copied().unique().collect();
        prop_assert_eq!(lazy, unique(elements));
    }
}

// =============================================================================
// remove_indices: survivors are exactly the elements at unlisted positions
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_indices_keeps_unlisted_positions(
        elements in arbitrary_elements(),
        indices in prop::collection::hash_set(0..80usize, 0..16)
    ) {
        let expected: Vec<i32> = elements
            .iter()
            .enumerate()
            .filter(|(position, _)| !indices.contains(position))
            .map(|(_, element)| *element)
            .collect();

        let mut vector = elements;
        remove_indices(&mut vector, &indices);

        prop_assert_eq!(vector, expected);
    }
}
