//! Sequence construction parameters.

use runway_core::{GrowthPolicy, SequenceError};

/// Configuration for constructing a `GrowableSequence`.
///
/// Validated by [`SequenceConfig::validate`] (and by
/// `GrowableSequence::from_config`); all values are fixed once the
/// sequence exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Initial number of default-initialised elements.
    pub length: usize,

    /// Initial capacity. `None` means "same as `length`".
    ///
    /// Must be at least `length` when given.
    pub capacity: Option<usize>,

    /// Capacity growth rule used when appending to a full sequence.
    ///
    /// Default: [`GrowthPolicy::Doubling`].
    pub growth: GrowthPolicy,
}

impl SequenceConfig {
    /// Default growth policy.
    pub const DEFAULT_GROWTH: GrowthPolicy = GrowthPolicy::Doubling;

    /// Create a config for `length` default elements with no headroom.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            capacity: None,
            growth: Self::DEFAULT_GROWTH,
        }
    }

    /// Request an explicit initial capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Use a non-default growth policy.
    pub fn growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// The capacity that will actually be allocated.
    pub fn resolved_capacity(&self) -> usize {
        self.capacity.unwrap_or(self.length)
    }

    /// Reject a capacity below the length or a policy that cannot grow.
    pub fn validate(&self) -> Result<(), SequenceError> {
        if let Some(capacity) = self.capacity {
            if capacity < self.length {
                return Err(SequenceError::invalid_argument(format!(
                    "capacity {capacity} is less than length {}",
                    self.length
                )));
            }
        }
        self.growth.validate()
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
