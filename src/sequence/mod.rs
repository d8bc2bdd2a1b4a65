//! Lazy, pull-based sequences.
//!
//! A sequence produces one element each time it is asked and reports
//! exhaustion with `None`; in Rust that is exactly an [`Iterator`]. This
//! module provides:
//!
//! - [`range`] / [`range!`](crate::range!): numeric ranges described by
//!   `(start, stop?, step)`
//! - [`map`] and [`filter`]: lazy combinators whose callbacks also receive
//!   the zero-based pull index
//! - [`take`]: bounds a possibly infinite sequence
//! - [`IntoSequence`] and [`lazy`]: the adapter that lets every combinator
//!   accept either a materialized collection or a lazy sequence
//!
//! No element is computed ahead of demand. Dropping a sequence is all it
//! takes to cancel it.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::range;
//! use lazy_seq::sequence::{filter, map};
//!
//! let doubled_evens: Vec<i32> = map(
//!     filter(range!(5_i32), |value, _| value % 2 == 0),
//!     |value, _| value * 2,
//! )
//! .collect();
//! assert_eq!(doubled_evens, vec![0, 4, 8]);
//! ```
//!
//! # Laws
//!
//! For a pure `f` and a finite source `s`:
//!
//! - **Order**: `map(s, f).collect()` equals applying `f` eagerly in source order
//! - **Identity**: `map(s, |x, _| x).collect() == s.collect()`
//! - **Fusion**: `map(map(s, f), g)` yields the same as `map(s, |x, i| g(f(x, i), i))`

mod filter;
mod map;
mod numeric_range;
mod source;
mod take;

pub use filter::{Filter, filter};
pub use map::{Map, map};
pub use numeric_range::{Numeric, Range, RangeDescriptor, range, try_range, unit_step};
pub use source::{IntoSequence, Lazy, lazy};
pub use take::{Take, take};

pub use crate::range;
