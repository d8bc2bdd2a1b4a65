//! Lazy element selection.

use std::fmt;
use std::iter::FusedIterator;

use super::source::IntoSequence;

/// Lazily keeps the elements of `source` for which `predicate` holds.
///
/// The predicate receives a reference to the element and the zero-based
/// index of the source pull that produced it; rejected elements still count
/// towards the index. Each pull of the returned sequence reads source
/// elements until one is accepted or the source is exhausted, in a loop, so
/// long runs of rejected elements do not grow the stack.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::range;
/// use lazy_seq::sequence::filter;
///
/// let evens: Vec<i32> = filter(range!(10_i32), |value, _| value % 2 == 0).collect();
/// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
///
/// let every_other: Vec<char> = filter(vec!['a', 'b', 'c'], |_, index| index % 2 == 0).collect();
/// assert_eq!(every_other, vec!['a', 'c']);
/// ```
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S::Sequence, P>
where
    S: IntoSequence,
    P: FnMut(&S::Item, usize) -> bool,
{
    Filter {
        source: source.into_sequence(),
        predicate,
        index: 0,
    }
}

/// Lazy sequence produced by [`filter`].
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
    index: usize,
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("source", &self.source)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<S, P> Iterator for Filter<S, P>
where
    S: Iterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            let element = self.source.next()?;
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&element, index) {
                return Some(element);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.source.size_hint();
        (0, upper)
    }
}

impl<S, P> FusedIterator for Filter<S, P>
where
    S: FusedIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
}

impl<S, P> IntoSequence for Filter<S, P>
where
    S: Iterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Sequence = Self;

    #[inline]
    fn into_sequence(self) -> Self {
        self
    }
}
