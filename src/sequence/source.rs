//! Input sources accepted by the sequence combinators.
//!
//! Every combinator takes a single polymorphic source parameter with two
//! variants:
//!
//! - a **materialized collection** (`Vec<T>`, `[T; N]`, `&[T]`, `&Vec<T>`,
//!   `VecDeque<T>`), which is adapted into a pull-based view over its
//!   elements without copying them;
//! - a **lazy sequence**, either one of this crate's own sequence types or a
//!   foreign iterator wrapped with [`lazy`].
//!
//! Combinator bodies only ever see the adapted [`Iterator`].

use std::collections::VecDeque;
use std::iter::FusedIterator;

/// Conversion of a materialized collection or a lazy sequence into a
/// pull-based sequence.
///
/// This plays the role [`IntoIterator`] plays for `for` loops, restricted to
/// the types the combinators know about so that collections and lazy
/// sequences never overlap.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{IntoSequence, lazy};
///
/// let mut from_collection = vec![1, 2, 3].into_sequence();
/// assert_eq!(from_collection.next(), Some(1));
///
/// let mut from_iterator = lazy(10..12).into_sequence();
/// assert_eq!(from_iterator.next(), Some(10));
/// ```
pub trait IntoSequence {
    /// The element type produced by the sequence.
    type Item;

    /// The pull-based sequence this source is adapted into.
    type Sequence: Iterator<Item = Self::Item>;

    /// Adapts `self` into a sequence.
    fn into_sequence(self) -> Self::Sequence;
}

impl<T> IntoSequence for Vec<T> {
    type Item = T;
    type Sequence = std::vec::IntoIter<T>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        self.into_iter()
    }
}

impl<T, const N: usize> IntoSequence for [T; N] {
    type Item = T;
    type Sequence = std::array::IntoIter<T, N>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        self.into_iter()
    }
}

impl<'a, T> IntoSequence for &'a [T] {
    type Item = &'a T;
    type Sequence = std::slice::Iter<'a, T>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        self.iter()
    }
}

impl<'a, T> IntoSequence for &'a Vec<T> {
    type Item = &'a T;
    type Sequence = std::slice::Iter<'a, T>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        self.iter()
    }
}

impl<T> IntoSequence for VecDeque<T> {
    type Item = T;
    type Sequence = std::collections::vec_deque::IntoIter<T>;

    #[inline]
    fn into_sequence(self) -> Self::Sequence {
        self.into_iter()
    }
}

/// A foreign iterator marked as a lazy sequence.
///
/// Created by [`lazy`]. Elements are pulled from the wrapped iterator only
/// when the consumer asks for them.
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Lazy<I> {
    inner: I,
}

/// Wraps any iterable as a lazy sequence.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::{lazy, map};
///
/// let squares: Vec<u64> = map(lazy(1..=4_u64), |value, _| value * value).collect();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn lazy<I: IntoIterator>(iterable: I) -> Lazy<I::IntoIter> {
    Lazy {
        inner: iterable.into_iter(),
    }
}

impl<I: Iterator> Iterator for Lazy<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Lazy<I> {}

impl<I: Iterator> IntoSequence for Lazy<I> {
    type Item = I::Item;
    type Sequence = Self;

    #[inline]
    fn into_sequence(self) -> Self {
        self
    }
}
