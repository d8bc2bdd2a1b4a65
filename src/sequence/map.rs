//! Lazy element-wise transformation.

use std::fmt;
use std::iter::FusedIterator;

use super::source::IntoSequence;

/// Lazily transforms each element of `source`.
///
/// The callback receives the element and its zero-based pull index. Nothing
/// is read from `source` until the returned sequence is pulled, and each pull
/// reads exactly one source element, so side effects in `callback` happen in
/// source order, interleaved with consumption. A panic in `callback` surfaces
/// at the pull of the offending element.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::map;
///
/// let labelled: Vec<String> = map(vec!["a", "b"], |value, index| format!("{index}:{value}"))
///     .collect();
/// assert_eq!(labelled, vec!["0:a", "1:b"]);
/// ```
///
/// A fallible callback yields a sequence of `Result`s:
///
/// ```rust
/// use lazy_seq::sequence::map;
///
/// let mut parsed = map(vec!["1", "x"], |text, _| text.parse::<i32>());
/// assert_eq!(parsed.next(), Some(Ok(1)));
/// assert!(parsed.next().unwrap().is_err());
/// ```
pub fn map<S, B, F>(source: S, callback: F) -> Map<S::Sequence, F>
where
    S: IntoSequence,
    F: FnMut(S::Item, usize) -> B,
{
    Map {
        source: source.into_sequence(),
        callback,
        index: 0,
    }
}

/// Lazy sequence produced by [`map`].
#[derive(Clone)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Map<S, F> {
    source: S,
    callback: F,
    index: usize,
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("source", &self.source)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<S, B, F> Iterator for Map<S, F>
where
    S: Iterator,
    F: FnMut(S::Item, usize) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        let element = self.source.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.callback)(element, index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S, B, F> FusedIterator for Map<S, F>
where
    S: FusedIterator,
    F: FnMut(S::Item, usize) -> B,
{
}

impl<S, B, F> IntoSequence for Map<S, F>
where
    S: Iterator,
    F: FnMut(S::Item, usize) -> B,
{
    type Item = B;
    type Sequence = Self;

    #[inline]
    fn into_sequence(self) -> Self {
        self
    }
}
