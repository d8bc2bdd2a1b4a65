//! # lazy-seq
//!
//! Lazy, pull-based sequence utilities for Rust.
//!
//! ## Overview
//!
//! The crate is a small toolkit of composable functions over sequences that
//! produce one element each time they are asked:
//!
//! - **Sequences**: [`range`](sequence::range) generation and the lazy
//!   [`map`](sequence::map), [`filter`](sequence::filter) and
//!   [`take`](sequence::take) combinators
//! - **Folding**: eager [`fold`](fold::fold), [`reduce`](fold::reduce) and
//!   [`try_reduce`](fold::try_reduce)
//! - **Sorting**: a recursive three-way partition quicksort with a
//!   sign-normalized comparator
//! - **Function Composition**: `compose!` and `pipe!` macros plus their
//!   runtime-length counterparts
//!
//! Every combinator accepts either a materialized collection (`Vec`, arrays,
//! slices) or an already-lazy sequence, see
//! [`IntoSequence`](sequence::IntoSequence).
//!
//! ## Feature Flags
//!
//! - `sequence`: Range generation and lazy combinators
//! - `fold`: Eager folding (implies `sequence`)
//! - `sort`: Three-way quicksort
//! - `compose`: Function composition utilities
//! - `serde`: `Serialize`/`Deserialize` for [`RangeDescriptor`](sequence::RangeDescriptor)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazy_seq::prelude::*;
//!
//! let evens_doubled: Vec<i32> = map(
//!     filter(range!(5_i32), |value, _| value % 2 == 0),
//!     |value, _| value * 2,
//! )
//! .collect();
//! assert_eq!(evens_doubled, vec![0, 4, 8]);
//!
//! let total = reduce(|accumulator, value, _| accumulator + value, 0, vec![1, 2, 3, 4]);
//! assert_eq!(total, 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use lazy_seq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, SequenceError};

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "fold")]
    pub use crate::fold::*;

    #[cfg(feature = "sort")]
    pub use crate::sort::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod error;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "fold")]
pub mod fold;

#[cfg(feature = "sort")]
pub mod sort;

#[cfg(feature = "compose")]
pub mod compose;
