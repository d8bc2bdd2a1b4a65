//! Three-way partition quicksort.
//!
//! [`sort_by`] buckets every element into `less`, `same` or `greater`
//! against the first element (the pivot), sorts `less` and `greater` the
//! same way, and concatenates the three. Buckets are kept on an explicit
//! work stack rather than the call stack, and a bucket that is already a
//! strictly ordered run (either direction) is emitted without partitioning,
//! so presorted input of any length takes linear time and memory. The comparator result is always normalized to
//! an [`Ordering`] through [`CompareResult::sign`] before it picks a bucket,
//! so comparators returning arbitrary magnitudes (`a - b` style) still land
//! ties in `same`.
//!
//! The input is borrowed and never mutated; the result is a fresh `Vec`.
//!
//! # Stability
//!
//! Only *weakly* stable: elements tied with the pivot of their partition
//! step keep their input order. Elements that are equal to each other but
//! not to a pivot may be reordered.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::sort::{sort, sort_by};
//!
//! let values = vec![3, 1, 2];
//! assert_eq!(sort(&values), vec![3, 2, 1]);
//! assert_eq!(sort_by(&values, |a, b| a - b), vec![1, 2, 3]);
//! assert_eq!(values, vec![3, 1, 2]);
//! ```

use std::cmp::Ordering;

use tracing::trace;

/// Comparator results that can be normalized to `-1`, `0` or `+1`.
///
/// Implemented for [`Ordering`], the signed integer types and the float
/// types. NaN normalizes to [`Ordering::Equal`].
pub trait CompareResult {
    /// The sign of the result as an [`Ordering`].
    fn sign(self) -> Ordering;
}

impl CompareResult for Ordering {
    #[inline]
    fn sign(self) -> Ordering {
        self
    }
}

impl CompareResult for Option<Ordering> {
    /// Incomparable values count as ties.
    #[inline]
    fn sign(self) -> Ordering {
        self.unwrap_or(Ordering::Equal)
    }
}

macro_rules! impl_compare_result_for_integers {
    ($($ty:ty),*) => {
        $(
            impl CompareResult for $ty {
                #[inline]
                fn sign(self) -> Ordering {
                    self.cmp(&0)
                }
            }
        )*
    };
}

macro_rules! impl_compare_result_for_floats {
    ($($ty:ty),*) => {
        $(
            impl CompareResult for $ty {
                #[inline]
                fn sign(self) -> Ordering {
                    self.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
                }
            }
        )*
    };
}

impl_compare_result_for_integers!(i8, i16, i32, i64, i128, isize);
impl_compare_result_for_floats!(f32, f64);

/// Sorts with the default comparator: descending.
///
/// Equivalent to `sort_by(items, |a, b| b.partial_cmp(a))`. Incomparable
/// values (NaN) are treated as ties with the pivot.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sort::sort;
///
/// assert_eq!(sort(&[3, 1, 2]), vec![3, 2, 1]);
/// assert_eq!(sort::<i32>(&[]), Vec::<i32>::new());
/// assert_eq!(sort(&["b", "c", "a"]), vec!["c", "b", "a"]);
/// ```
pub fn sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    sort_by(items, |left: &T, right: &T| right.partial_cmp(left))
}

/// Sorts with `compare`, which returns a negative result when its first
/// argument belongs before its second.
///
/// Lengths zero and one are returned as they are. The comparator is trusted:
/// one that is not a consistent total order yields an unspecified order but
/// always terminates, since each step only compares against its own pivot.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sort::sort_by;
///
/// let words = ["pear", "fig", "banana"];
/// let by_length = sort_by(&words, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(by_length, vec!["fig", "pear", "banana"]);
///
/// // Magnitudes do not matter, only signs.
/// let by_value = sort_by(&[10_i64, -400, 7], |a, b| (a - b) * 1_000);
/// assert_eq!(by_value, vec![-400, 7, 10]);
/// ```
pub fn sort_by<T, R, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    R: CompareResult,
    F: Fn(&T, &T) -> R,
{
    let normalized = |left: &T, right: &T| compare(left, right).sign();
    partition_sort(items.to_vec(), &normalized)
}

/// Work left on the partition stack.
enum Pending<T> {
    /// A bucket that still has to be partitioned.
    Unsorted(Vec<T>),
    /// Elements already in their final relative order.
    Sorted(Vec<T>),
}

// Partitions are driven from an explicit stack, `less` on top, so memory
// stays linear and no call depth builds up on ordered input.
fn partition_sort<T, F>(items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = Vec::with_capacity(items.len());
    let mut pending = vec![Pending::Unsorted(items)];

    while let Some(work) = pending.pop() {
        let mut items = match work {
            Pending::Sorted(mut run) => {
                sorted.append(&mut run);
                continue;
            }
            Pending::Unsorted(items) => items,
        };

        if items.len() <= 1 {
            sorted.append(&mut items);
            continue;
        }

        match strict_run(&items, compare) {
            Some(Ordering::Greater) => {
                trace!(length = items.len(), "bucket already ordered");
                sorted.append(&mut items);
                continue;
            }
            Some(_) => {
                trace!(length = items.len(), "bucket ordered in reverse");
                items.reverse();
                sorted.append(&mut items);
                continue;
            }
            None => {}
        }

        let mut rest = items.into_iter();
        let Some(pivot) = rest.next() else {
            continue;
        };
        let mut same = vec![pivot];
        let mut less = Vec::new();
        let mut greater = Vec::new();

        for element in rest {
            match compare(&element, &same[0]) {
                Ordering::Less => less.push(element),
                Ordering::Equal => same.push(element),
                Ordering::Greater => greater.push(element),
            }
        }

        trace!(
            less = less.len(),
            same = same.len(),
            greater = greater.len(),
            "partitioned around pivot"
        );

        if !greater.is_empty() {
            pending.push(Pending::Unsorted(greater));
        }
        pending.push(Pending::Sorted(same));
        if !less.is_empty() {
            pending.push(Pending::Unsorted(less));
        }
    }

    sorted
}

/// Returns the direction when every element compares strictly `Greater`
/// (or strictly `Less`) than its predecessor.
///
/// Such a bucket has no ties, so for a consistent comparator partitioning
/// it would reproduce it unchanged, or reversed.
fn strict_run<T, F>(items: &[T], compare: &F) -> Option<Ordering>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut pairs = items.windows(2);
    let direction = pairs.next().map(|pair| compare(&pair[1], &pair[0]))?;
    if direction == Ordering::Equal {
        return None;
    }
    pairs
        .all(|pair| compare(&pair[1], &pair[0]) == direction)
        .then_some(direction)
}
