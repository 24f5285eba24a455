//! Test utilities and fixtures for Runway development.
//!
//! Provides a clone-counting element type ([`Tracked`] + [`CloneLedger`])
//! for measuring how much copying reallocation causes, and builders for
//! the sequence shapes that recur across tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

use runway_buffer::GrowableSequence;
use runway_core::SequenceError;

/// Shared counter of [`Tracked::clone`] calls.
#[derive(Clone, Debug, Default)]
pub struct CloneLedger {
    clones: Rc<Cell<u64>>,
}

impl CloneLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so that cloning it is recorded in this ledger.
    pub fn track(&self, value: u64) -> Tracked {
        Tracked {
            value,
            ledger: self.clone(),
        }
    }

    /// Clones recorded so far.
    pub fn clones(&self) -> u64 {
        self.clones.get()
    }

    pub fn reset(&self) {
        self.clones.set(0);
    }
}

/// An element that reports every clone to its [`CloneLedger`].
///
/// `Tracked::default()` reports to a private ledger nobody reads, so
/// default-filled headroom never shows up in a test's counts.
#[derive(Debug, Default)]
pub struct Tracked {
    pub value: u64,
    ledger: CloneLedger,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        let clones = &self.ledger.clones;
        clones.set(clones.get() + 1);
        Self {
            value: self.value,
            ledger: self.ledger.clone(),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// `[0, 1, ..., n-1]` built by appending to an empty sequence.
pub fn appended_range(n: u64) -> GrowableSequence<u64> {
    let mut seq = GrowableSequence::new();
    for i in 0..n {
        seq.append(i);
    }
    seq
}

/// `len` defaults with `headroom` extra slots of capacity.
pub fn with_headroom<T: Default>(
    len: usize,
    headroom: usize,
) -> Result<GrowableSequence<T>, SequenceError> {
    GrowableSequence::with_len_and_capacity(len, len + headroom)
}

/// The capacities observed after each of `appends` appends to an empty
/// sequence.
pub fn capacity_trace(appends: usize) -> Vec<usize> {
    let mut seq: GrowableSequence<u8> = GrowableSequence::new();
    (0..appends)
        .map(|_| {
            seq.append(0);
            seq.capacity()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_counts_clones() {
        let ledger = CloneLedger::new();
        let a = ledger.track(3);
        let b = a.clone();
        let _c = b.clone();
        assert_eq!(ledger.clones(), 2);
        ledger.reset();
        assert_eq!(ledger.clones(), 0);
    }

    #[test]
    fn defaults_do_not_touch_ledger() {
        let ledger = CloneLedger::new();
        let d = Tracked::default();
        let _ = d.clone();
        assert_eq!(ledger.clones(), 0);
    }

    #[test]
    fn appended_range_contents() {
        assert_eq!(appended_range(4).to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn capacity_trace_doubles() {
        assert_eq!(capacity_trace(5), vec![1, 2, 4, 4, 8]);
    }
}
