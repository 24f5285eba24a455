//! Reallocation counters for a single sequence header.

/// How much copying a sequence's appends have caused.
///
/// Counts are per header: a view starts from zero, and a clone inherits
/// the counts of the sequence it was cloned from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Number of appends that had to allocate a new buffer.
    pub reallocations: u64,
    /// Total elements copied out of old buffers during reallocation.
    pub copied_elements: u64,
}

impl GrowthStats {
    pub(crate) fn record_reallocation(&mut self, copied: usize) {
        self.reallocations += 1;
        self.copied_elements += copied as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let s = GrowthStats::default();
        assert_eq!(s.reallocations, 0);
        assert_eq!(s.copied_elements, 0);
    }

    #[test]
    fn record_accumulates() {
        let mut s = GrowthStats::default();
        s.record_reallocation(0);
        s.record_reallocation(4);
        assert_eq!(s.reallocations, 2);
        assert_eq!(s.copied_elements, 4);
    }
}
