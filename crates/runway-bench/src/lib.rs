//! Benchmark workloads for Runway sequences.
//!
//! - [`append_profile`]: `n` appends to an empty sequence under a growth policy
//! - [`presized_profile`]: the same appends into a sequence with enough headroom
//! - [`stride_indices`]: a deterministic, cache-unfriendly index order for reads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use runway_buffer::{GrowableSequence, SequenceConfig};
use runway_core::{GrowthPolicy, SequenceError};

/// Append `0..n` to an empty sequence using `growth`.
pub fn append_profile(
    n: usize,
    growth: GrowthPolicy,
) -> Result<GrowableSequence<u64>, SequenceError> {
    let mut seq = GrowableSequence::from_config(&SequenceConfig::new(0).growth(growth))?;
    seq.extend(0..n as u64);
    Ok(seq)
}

/// Append `0..n` into a sequence pre-sized to hold all of them.
pub fn presized_profile(n: usize) -> Result<GrowableSequence<u64>, SequenceError> {
    let mut seq = GrowableSequence::with_len_and_capacity(0, n)?;
    seq.extend(0..n as u64);
    Ok(seq)
}

/// Every index in `0..len` exactly once, visited with a large odd stride.
pub fn stride_indices(len: usize) -> Vec<usize> {
    const STRIDE: usize = 7919;
    if len == 0 {
        return Vec::new();
    }
    // An odd stride coprime to len visits every slot; fall back to 1 otherwise.
    let stride = if gcd(STRIDE, len) == 1 { STRIDE } else { 1 };
    (0..len).map(|i| (i * stride) % len).collect()
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_profile_fills_sequence() {
        let seq = append_profile(100, GrowthPolicy::Doubling).unwrap();
        assert_eq!(seq.len(), 100);
        assert_eq!(seq.capacity(), 128);
    }

    #[test]
    fn presized_profile_never_reallocates() {
        let seq = presized_profile(100).unwrap();
        assert_eq!(seq.growth_stats().reallocations, 0);
        assert_eq!(seq.capacity(), 100);
    }

    #[test]
    fn stride_indices_is_a_permutation() {
        for len in [0, 1, 10, 7919, 10_000] {
            let mut idx = stride_indices(len);
            idx.sort_unstable();
            assert_eq!(idx, (0..len).collect::<Vec<_>>());
        }
    }
}
