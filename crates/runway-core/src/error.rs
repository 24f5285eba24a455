//! Error types for sequence operations.
//!
//! Only two things can go wrong: an index (or slice bound) outside the
//! logically valid range, or construction parameters that violate the
//! length/capacity contract. Neither is recovered internally.

use std::error::Error;
use std::fmt;

/// Errors returned by sequence, view, and table operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// An index or slice bound fell outside `[0, len)` (or `[0, len]`
    /// for slice ends).
    ///
    /// Positions in the capacity headroom `[len, capacity)` are reported
    /// here too: headroom is allocated but not addressable.
    IndexOutOfRange {
        /// The offending index or bound.
        index: usize,
        /// Logical length of the sequence at the time of the call.
        len: usize,
    },
    /// Construction parameters were rejected.
    InvalidArgument {
        /// Human-readable description of the violated constraint.
        reason: String,
    },
}

impl SequenceError {
    /// Shorthand for [`SequenceError::InvalidArgument`].
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, length {len}")
            }
            Self::InvalidArgument { reason } => {
                write!(f, "invalid argument: {reason}")
            }
        }
    }
}

impl Error for SequenceError {}
