//! Bounding a possibly infinite sequence.

use std::iter::FusedIterator;

use super::source::IntoSequence;

/// Lazily yields at most `count` elements of `source`.
///
/// Never pulls more than `count` elements, which makes it the safe way to
/// hand an unbounded range to an eager consumer.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{range, take};
///
/// let unbounded = range(0.0, Some(f64::INFINITY), 0.5);
/// assert_eq!(take(unbounded, 3).collect::<Vec<_>>(), vec![0.0, 0.5, 1.0]);
/// ```
pub fn take<S: IntoSequence>(source: S, count: usize) -> Take<S::Sequence> {
    Take {
        source: source.into_sequence(),
        remaining: count,
    }
}

/// Lazy sequence produced by [`take`].
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Take<S> {
    source: S,
    remaining: usize,
}

impl<S: Iterator> Iterator for Take<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let element = self.source.next();
        if element.is_none() {
            self.remaining = 0;
        }
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (lower, upper) = self.source.size_hint();
        let upper = upper.map_or(self.remaining, |upper| upper.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

impl<S: Iterator> FusedIterator for Take<S> {}

impl<S: Iterator> IntoSequence for Take<S> {
    type Item = S::Item;
    type Sequence = Self;

    #[inline]
    fn into_sequence(self) -> Self {
        self
    }
}
