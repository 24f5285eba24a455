//! Opaque storage identity tokens.
//!
//! Sequences never expose raw element addresses. Instead every backing
//! allocation is stamped with a [`StorageId`], and a single slot within it
//! is named by an [`ElementRef`]. Comparing tokens answers "is this the same
//! backing storage?" without address arithmetic.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`StorageId`] allocation.
static STORAGE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of one backing allocation.
///
/// Allocated from a monotonic atomic counter via [`StorageId::next`].
/// Every reallocation produces a fresh id, so two ids are equal iff they
/// name the same allocation. Unlike an address, an id is never reused after
/// the allocation is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageId(u64);

impl StorageId {
    /// Allocate a fresh, unique storage ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(STORAGE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a single element slot: which allocation, and which slot in it.
///
/// Returned by `address_of`. Two refs are equal iff they name the same slot
/// of the same allocation, so a view and its owner agree on the ref of a
/// shared element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementRef {
    storage: StorageId,
    slot: usize,
}

impl ElementRef {
    /// Create a ref to `slot` within `storage`.
    pub fn new(storage: StorageId, slot: usize) -> Self {
        Self { storage, slot }
    }

    /// The allocation this slot belongs to.
    pub fn storage(&self) -> StorageId {
        self.storage
    }

    /// Position of the slot from the start of the allocation.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.storage, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_ids_are_unique() {
        let a = StorageId::next();
        let b = StorageId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn element_refs_compare_storage_and_slot() {
        let storage = StorageId::next();
        let other = StorageId::next();
        assert_eq!(ElementRef::new(storage, 2), ElementRef::new(storage, 2));
        assert_ne!(ElementRef::new(storage, 2), ElementRef::new(storage, 3));
        assert_ne!(ElementRef::new(storage, 2), ElementRef::new(other, 2));
    }

    #[test]
    fn element_ref_display() {
        let storage = StorageId::next();
        let r = ElementRef::new(storage, 7);
        assert_eq!(r.to_string(), format!("{storage}[7]"));
        assert_eq!(r.slot(), 7);
        assert_eq!(r.storage(), storage);
    }
}
