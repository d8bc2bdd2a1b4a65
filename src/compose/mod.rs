//! Function composition utilities.
//!
//! Pure combinators that build one unary function out of an ordered list of
//! unary functions. No sequences are involved; each composed function runs
//! exactly once per call of the result, in the stated order.
//!
//! - [`compose!`]: right to left, `compose!(f, g, h)(x) == f(g(h(x)))`
//! - [`pipe!`]: left to right, `pipe!(f, g, h)(x) == h(g(f(x)))`
//! - [`compose_all`] / [`pipe_all`]: the same over a runtime-length list
//! - [`identity`]: the result of composing an empty list
//!
//! # Examples
//!
//! ```
//! use lazy_seq::{compose, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(compose!(add_one, double)(5), 11);
//! assert_eq!(pipe!(add_one, double)(5), 12);
//! assert_eq!(compose!()(5), 5);
//! assert_eq!(pipe!()(5), 5);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Duality**: `pipe!(f, g) == compose!(g, f)`

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{Endomorphism, compose_all, identity, pipe_all};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
