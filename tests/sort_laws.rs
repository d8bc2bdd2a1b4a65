#![cfg(feature = "sort")]
//! Property-based tests for the three-way partition quicksort.
//!
//! - **Ordering**: `sort_by(xs, a - b)` is ascending, `sort(xs)` is descending
//! - **Permutation**: the result is a permutation of the input
//! - **Agreement**: the result matches the standard library's sort on the same key
//! - **Purity**: the input is never mutated
//! - **Magnitude Independence**: scaling the comparator result does not change the result
//! - **Presorted Input**: long inputs already in either order sort correctly

use lazy_seq::sort::{sort, sort_by};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_sort_by_difference_is_ascending(values in prop::collection::vec(-10_000_i32..10_000, 0..64)) {
        let sorted = sort_by(&values, |a, b| a - b);

        prop_assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn prop_default_sort_is_descending(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let sorted = sort(&values);

        prop_assert!(sorted.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn prop_sort_matches_std(values in prop::collection::vec(any::<i16>(), 0..64)) {
        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        prop_assert_eq!(sort(&values), expected);
    }

    #[test]
    fn prop_sort_is_permutation(values in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut sorted = sort_by(&values, |a, b| a.cmp(b));
        let mut original = values.clone();
        sorted.sort_unstable();
        original.sort_unstable();

        prop_assert_eq!(sorted, original);
    }

    #[test]
    fn prop_sort_does_not_mutate(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let snapshot = values.clone();

        let _ = sort(&values);
        let _ = sort_by(&values, |a, b| b.cmp(a));

        prop_assert_eq!(values, snapshot);
    }

    #[test]
    fn prop_comparator_magnitude_is_irrelevant(
        values in prop::collection::vec(-1_000_i64..1_000, 0..64),
        scale in 1_i64..1_000_000,
    ) {
        let unit = sort_by(&values, |a, b| (a - b).signum());
        let scaled = sort_by(&values, |a, b| (a - b) * scale);

        prop_assert_eq!(unit, scaled);
    }

    #[test]
    fn prop_equal_keys_with_first_pivot_keep_input_order(
        keys in prop::collection::vec(0_u8..3, 1..32),
    ) {
        let tagged: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let pivot_key = tagged[0].0;

        let sorted = sort_by(&tagged, |a, b| a.0.cmp(&b.0));
        let tied_with_first_pivot: Vec<usize> = sorted
            .iter()
            .filter(|(key, _)| *key == pivot_key)
            .map(|&(_, position)| position)
            .collect();

        prop_assert!(tied_with_first_pivot.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_presorted_input_sorts_ascending(
        mut values in prop::collection::vec(-1_000_000_i32..1_000_000, 1_000..5_000),
        reversed in any::<bool>(),
    ) {
        values.sort_unstable();
        let expected = values.clone();
        if reversed {
            values.reverse();
        }

        prop_assert_eq!(sort_by(&values, |a, b| a - b), expected);
    }

    #[test]
    fn prop_presorted_input_sorts_descending_by_default(
        mut values in prop::collection::vec(any::<i64>(), 1_000..5_000),
        reversed in any::<bool>(),
    ) {
        values.sort_unstable_by(|a, b| b.cmp(a));
        let expected = values.clone();
        if reversed {
            values.reverse();
        }

        prop_assert_eq!(sort(&values), expected);
    }
}
