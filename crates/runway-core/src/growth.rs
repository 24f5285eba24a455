//! Capacity growth policy applied when appending to a full sequence.

use crate::error::SequenceError;

/// How a full sequence chooses its next capacity.
///
/// [`GrowthPolicy::Doubling`] is the default and the only policy whose
/// capacity sequence (1, 2, 4, 8, ...) is guaranteed by the sequence API.
/// [`GrowthPolicy::Scaled`] exists for callers that want a gentler factor
/// and accept a different capacity progression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// `max(1, capacity * 2)`.
    #[default]
    Doubling,
    /// `max(capacity + 1, capacity * numerator / denominator)`.
    ///
    /// The factor `numerator / denominator` must be strictly greater than 1.
    Scaled {
        /// Factor numerator.
        numerator: u32,
        /// Factor denominator. Must be non-zero.
        denominator: u32,
    },
}

impl GrowthPolicy {
    /// Check that the policy strictly grows capacity.
    pub fn validate(&self) -> Result<(), SequenceError> {
        match *self {
            Self::Doubling => Ok(()),
            Self::Scaled {
                numerator,
                denominator,
            } => {
                if denominator == 0 {
                    return Err(SequenceError::invalid_argument(
                        "growth factor denominator must be non-zero",
                    ));
                }
                if numerator <= denominator {
                    return Err(SequenceError::invalid_argument(format!(
                        "growth factor {numerator}/{denominator} must be greater than 1"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Capacity to allocate when a sequence of capacity `current` is full.
    ///
    /// Always strictly greater than `current` (saturating at `usize::MAX`).
    pub fn next_capacity(&self, current: usize) -> usize {
        match *self {
            Self::Doubling => current.saturating_mul(2).max(1),
            Self::Scaled {
                numerator,
                denominator,
            } => {
                let scaled =
                    current.saturating_mul(numerator as usize) / denominator.max(1) as usize;
                scaled.max(current.saturating_add(1))
            }
        }
    }
}
