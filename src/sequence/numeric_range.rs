//! Lazy numeric ranges.
//!
//! A range is described by `(start, stop?, step)`. When `stop` is omitted the
//! description is read as `(0, start, step)`. Values `start, start + step, …`
//! are produced while `step * (stop - current) > 0`, so a range whose `step`
//! points away from `stop`, or is zero, is empty.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::range;
//!
//! assert_eq!(range!(5).collect::<Vec<i32>>(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(range!(5, 0, -1).collect::<Vec<i32>>(), vec![5, 4, 3, 2, 1]);
//! assert_eq!(range!(0, 10, 3).collect::<Vec<i32>>(), vec![0, 3, 6, 9]);
//! assert!(range!(0, 10, -1).next().is_none());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::source::IntoSequence;
use crate::error::{Result, SequenceError};

/// Numbers a [`Range`] can step through.
///
/// Implemented for the signed integer types and for `f32`/`f64`. Unsigned
/// types are left out because a range must be able to step downwards.
pub trait Numeric: Copy + PartialOrd + fmt::Debug {
    /// The additive identity.
    const ZERO: Self;
    /// The default step.
    const ONE: Self;

    /// Returns `self + step`, or `None` when the sum is not representable.
    fn advance(self, step: Self) -> Option<Self>;

    /// Returns `false` for NaN and infinities.
    fn is_finite_value(self) -> bool;
}

macro_rules! impl_numeric_for_integers {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_numeric_for_floats {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_numeric_for_integers!(i8, i16, i32, i64, i128, isize);
impl_numeric_for_floats!(f32, f64);

/// The `(start, stop?, step)` description of a numeric range.
///
/// A descriptor generates its values only once turned into a [`Range`]; it
/// never materializes them. With the `serde` feature it can be read from
/// configuration.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::RangeDescriptor;
///
/// let descriptor = RangeDescriptor::new(4, None, 2);
/// assert_eq!(descriptor.normalized(), (0, 4, 2));
/// assert_eq!(descriptor.into_range().collect::<Vec<_>>(), vec![0, 2]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeDescriptor<N> {
    /// First value, or the stop value when `stop` is omitted.
    pub start: N,
    /// Exclusive bound.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stop: Option<N>,
    /// Distance between consecutive values.
    pub step: N,
}

impl<N: Numeric> RangeDescriptor<N> {
    /// Creates a descriptor without validating it.
    #[inline]
    pub const fn new(start: N, stop: Option<N>, step: N) -> Self {
        Self { start, stop, step }
    }

    /// Creates a descriptor, rejecting non-finite parameters.
    ///
    /// `range` itself accepts any value and degrades to an empty or
    /// non-terminating sequence; this constructor is the boundary check for
    /// callers that take parameters from outside the program.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] when `start`, `stop` or
    /// `step` is NaN, when `start` or `step` is infinite, or when a non-zero
    /// float `step` is too small to move the first value (`1e16 + 1.0` is
    /// still `1e16`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_seq::sequence::RangeDescriptor;
    ///
    /// assert!(RangeDescriptor::try_new(0.0, Some(1.0), 0.25).is_ok());
    /// assert!(RangeDescriptor::try_new(0.0, Some(1.0), f64::NAN).is_err());
    /// ```
    pub fn try_new(start: N, stop: Option<N>, step: N) -> Result<Self> {
        let descriptor = Self::new(start, stop, step);
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Checks the parameters the way [`try_new`](Self::try_new) does.
    ///
    /// An infinite `stop` is allowed and describes an unbounded range. Only
    /// the first step is checked: a float range that runs long enough can
    /// still reach values where `step` is lost to rounding.
    ///
    /// # Errors
    ///
    /// See [`try_new`](Self::try_new).
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite_value() {
            return Err(self.reject("start", self.start, "must be a finite number"));
        }
        if let Some(stop) = self.stop {
            // NaN is the only value not comparable with itself.
            if stop.partial_cmp(&stop).is_none() {
                return Err(self.reject("stop", stop, "must be a number"));
            }
        }
        if !self.step.is_finite_value() {
            return Err(self.reject("step", self.step, "must be a finite number"));
        }
        let (first, _, step) = self.normalized();
        if step != N::ZERO && first.advance(step) == Some(first) {
            return Err(self.reject("step", step, "must change the first value"));
        }
        Ok(())
    }

    fn reject(&self, parameter: &'static str, value: N, requirement: &str) -> SequenceError {
        debug!(descriptor = ?self, parameter, "rejected range descriptor");
        SequenceError::invalid_argument(parameter, format!("{requirement}, got {value:?}"))
    }

    /// Resolves an omitted `stop` into `(start, stop, step)`.
    #[inline]
    pub fn normalized(&self) -> (N, N, N) {
        self.stop.map_or((N::ZERO, self.start, self.step), |stop| {
            (self.start, stop, self.step)
        })
    }

    /// Turns the descriptor into its lazy sequence.
    pub fn into_range(self) -> Range<N> {
        let (start, stop, step) = self.normalized();
        trace!(?start, ?stop, ?step, "range constructed");
        Range {
            current: start,
            stop,
            step,
            exhausted: false,
        }
    }
}

/// Creates a lazy numeric range.
///
/// With `stop == None` this is `range(N::ZERO, Some(start), step)`.
/// Otherwise it yields `start, start + step, …` for as long as the value is
/// strictly before `stop` in the direction of `step`. A zero step, or a step
/// pointing away from `stop`, yields nothing.
///
/// The result is unbounded when `stop` is never reached, for example a float
/// range towards `f64::INFINITY`. Feeding such a range into an eager consumer
/// such as [`fold`](crate::fold::fold) never returns.
///
/// The [`range!`](crate::range!) macro supplies the defaults.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::sequence::range;
///
/// assert_eq!(range(5, None, 1).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(range(0.0, Some(1.0), 0.25).count(), 4);
/// assert_eq!(range(3, Some(3), 1).count(), 0);
/// assert_eq!(range(0, Some(10), 0).count(), 0);
/// ```
pub fn range<N: Numeric>(start: N, stop: Option<N>, step: N) -> Range<N> {
    RangeDescriptor::new(start, stop, step).into_range()
}

/// Like [`range`], rejecting non-finite parameters first.
///
/// # Errors
///
/// See [`RangeDescriptor::try_new`].
pub fn try_range<N: Numeric>(start: N, stop: Option<N>, step: N) -> Result<Range<N>> {
    RangeDescriptor::try_new(start, stop, step).map(RangeDescriptor::into_range)
}

/// Default step of the [`range!`](crate::range!) macro.
#[doc(hidden)]
#[inline]
#[must_use]
pub const fn unit_step<N: Numeric>() -> N {
    N::ONE
}

/// Lazy sequence produced by [`range`].
#[derive(Clone, Debug)]
#[must_use = "sequences are lazy and do nothing unless consumed"]
pub struct Range<N> {
    current: N,
    stop: N,
    step: N,
    exhausted: bool,
}

impl<N: Numeric> Range<N> {
    // Same truth table as `step * (stop - current) > 0`, without the
    // arithmetic that could overflow.
    #[inline]
    fn has_next(&self) -> bool {
        (self.step > N::ZERO && self.current < self.stop)
            || (self.step < N::ZERO && self.current > self.stop)
    }
}

impl<N: Numeric> Iterator for Range<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if self.exhausted || !self.has_next() {
            self.exhausted = true;
            return None;
        }

        let value = self.current;
        match value.advance(self.step) {
            Some(next) => self.current = next,
            // Anything past the representable range is past `stop` too.
            None => self.exhausted = true,
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted || !self.has_next() {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}

impl<N: Numeric> FusedIterator for Range<N> {}

impl<N: Numeric> IntoSequence for Range<N> {
    type Item = N;
    type Sequence = Self;

    #[inline]
    fn into_sequence(self) -> Self {
        self
    }
}

/// Builds a [`Range`] with the usual defaults.
///
/// - `range!(stop)` counts from zero to `stop`
/// - `range!(start, stop)` uses a step of one
/// - `range!(start, stop, step)`
///
/// # Examples
///
/// ```rust
/// use lazy_seq::range;
///
/// assert_eq!(range!(3).collect::<Vec<i64>>(), vec![0, 1, 2]);
/// assert_eq!(range!(2, 5).collect::<Vec<i64>>(), vec![2, 3, 4]);
/// assert_eq!(range!(1.0, 0.0, -0.5).collect::<Vec<f64>>(), vec![1.0, 0.5]);
/// ```
#[macro_export]
macro_rules! range {
    ($stop:expr $(,)?) => {
        $crate::sequence::range(
            $stop,
            ::core::option::Option::None,
            $crate::sequence::unit_step(),
        )
    };

    ($start:expr, $stop:expr $(,)?) => {
        $crate::sequence::range(
            $start,
            ::core::option::Option::Some($stop),
            $crate::sequence::unit_step(),
        )
    };

    ($start:expr, $stop:expr, $step:expr $(,)?) => {
        $crate::sequence::range($start, ::core::option::Option::Some($stop), $step)
    };
}
