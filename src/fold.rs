//! Eager folding of sequences into a single value.
//!
//! All functions here consume their source completely, strictly left to
//! right and exactly once per element, in a loop whose stack depth does not
//! depend on the length of the source.
//!
//! Feeding an unbounded sequence (for example a float range towards
//! infinity) into these functions never returns. Bound it with
//! [`take`](crate::sequence::take) first.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::fold::{fold, reduce};
//! use lazy_seq::range;
//!
//! assert_eq!(fold(range!(1_i32, 5), |product, value| product * value, 1), 24);
//! assert_eq!(reduce(|sum, value, _| sum + value, 0, vec![1, 2, 3, 4]), 10);
//! ```

use crate::sequence::IntoSequence;

/// Folds `source` with `callback(accumulator, element)`, starting from
/// `initial`.
///
/// Returns `initial` unchanged when `source` is empty.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::fold::fold;
///
/// let joined = fold(
///     vec!["a", "b", "c"],
///     |mut text: String, part| {
///         text.push_str(part);
///         text
///     },
///     String::new(),
/// );
/// assert_eq!(joined, "abc");
///
/// assert_eq!(fold(Vec::<i32>::new(), |sum, value| sum + value, 7), 7);
/// ```
pub fn fold<S, R, F>(source: S, mut callback: F, initial: R) -> R
where
    S: IntoSequence,
    F: FnMut(R, S::Item) -> R,
{
    let mut accumulator = initial;
    for element in source.into_sequence() {
        accumulator = callback(accumulator, element);
    }
    accumulator
}

/// Folds `source` with `callback(accumulator, element, index)`, starting
/// from `initial`.
///
/// The argument order mirrors the familiar `reduce(callback, initial, xs)`
/// shape; `index` is the zero-based position of `element`. Returns `initial`
/// unchanged when `source` is empty.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::fold::reduce;
/// use lazy_seq::sequence::lazy;
///
/// // 1 * 0 + 2 * 1 + 3 * 2
/// let weighted = reduce(|sum, value, index| sum + value * index, 0, lazy(1..=3_usize));
/// assert_eq!(weighted, 8);
/// ```
pub fn reduce<S, R, F>(mut callback: F, initial: R, source: S) -> R
where
    S: IntoSequence,
    F: FnMut(R, S::Item, usize) -> R,
{
    let mut accumulator = initial;
    for (index, element) in source.into_sequence().enumerate() {
        accumulator = callback(accumulator, element, index);
    }
    accumulator
}

/// Like [`reduce`], stopping at the first error.
///
/// Elements after the one whose callback failed are not pulled.
///
/// # Errors
///
/// Returns the first error produced by `callback`.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::fold::try_reduce;
///
/// let total: Result<i32, std::num::ParseIntError> = try_reduce(
///     |sum, text, _| text.parse::<i32>().map(|value| sum + value),
///     0,
///     vec!["1", "2", "3"],
/// );
/// assert_eq!(total, Ok(6));
///
/// let failed: Result<i32, std::num::ParseIntError> = try_reduce(
///     |sum, text, _| text.parse::<i32>().map(|value| sum + value),
///     0,
///     vec!["1", "two", "3"],
/// );
/// assert!(failed.is_err());
/// ```
pub fn try_reduce<S, R, E, F>(mut callback: F, initial: R, source: S) -> Result<R, E>
where
    S: IntoSequence,
    F: FnMut(R, S::Item, usize) -> Result<R, E>,
{
    let mut accumulator = initial;
    for (index, element) in source.into_sequence().enumerate() {
        accumulator = callback(accumulator, element, index)?;
    }
    Ok(accumulator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{lazy, map, range};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn fold_processes_left_to_right() {
        let order = fold(
            vec![1, 2, 3],
            |mut seen: Vec<i32>, value| {
                seen.push(value);
                seen
            },
            Vec::new(),
        );

        assert_eq!(order, vec![1, 2, 3]);
    }

    #[rstest]
    fn fold_over_mapped_range_matches_eager_map() {
        let lazily = fold(
            map(range(5, None, 1), |value, _| value * value),
            |mut collected: Vec<i32>, value| {
                collected.push(value);
                collected
            },
            Vec::new(),
        );

        assert_eq!(lazily, vec![0, 1, 4, 9, 16]);
    }

    #[rstest]
    fn reduce_passes_indices() {
        let indices = reduce(
            |mut collected: Vec<usize>, _, index| {
                collected.push(index);
                collected
            },
            Vec::new(),
            vec!['x', 'y', 'z'],
        );

        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[rstest]
    #[case(vec![], 42)]
    #[case(vec![1, 2, 3, 4], 52)]
    fn reduce_returns_initial_plus_sum(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(reduce(|sum, value, _| sum + value, 42, values), expected);
    }

    #[rstest]
    fn fold_handles_long_sequences_in_constant_stack() {
        let sum = fold(range(0_i64, Some(1_000_000), 1), |sum, value| sum + value, 0);

        assert_eq!(sum, 499_999_500_000);
    }

    #[rstest]
    fn try_reduce_stops_pulling_after_error() {
        let pulled = Cell::new(0);
        let source = lazy(std::iter::from_fn(|| {
            pulled.set(pulled.get() + 1);
            Some(pulled.get())
        }));

        let result: Result<i32, String> = try_reduce(
            |sum, value, _| {
                if value == 3 {
                    Err(format!("rejected {value}"))
                } else {
                    Ok(sum + value)
                }
            },
            0,
            source,
        );

        assert_eq!(result, Err(String::from("rejected 3")));
        assert_eq!(pulled.get(), 3);
    }
}
