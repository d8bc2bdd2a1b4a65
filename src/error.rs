//! Error types for sequence construction.
//!
//! Combinators themselves are infallible: callbacks are checked by the type
//! system and an infinite source fed into an eager consumer is a caller
//! contract violation rather than a detected error. The only failures the
//! crate reports are arguments rejected at a validating boundary such as
//! [`RangeDescriptor::try_new`](crate::sequence::RangeDescriptor::try_new).

use thiserror::Error;

/// Result type for validating constructors.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Errors surfaced at the argument boundary.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::error::SequenceError;
///
/// let error = SequenceError::invalid_argument("step", "must be finite");
/// assert_eq!(error.to_string(), "invalid argument `step`: must be finite");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A parameter value cannot describe a meaningful sequence.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl SequenceError {
    /// Creates an [`SequenceError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }
}
