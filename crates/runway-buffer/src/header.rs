//! The (buffer, offset, length, capacity) tuple behind sequences and views.
//!
//! Both [`GrowableSequence`](crate::GrowableSequence) and
//! [`SequenceView`](crate::SequenceView) are thin wrappers around a
//! [`Header`]. All bounds checks, the append/reallocate branch, and
//! re-slicing live here so the two public types cannot drift apart.

use std::cell::{Ref, RefMut};
use std::fmt;
use std::rc::Rc;

use runway_core::{ElementRef, GrowthPolicy, SequenceError, StorageId};
use tracing::trace;

use crate::buffer::{Buffer, SharedBuffer};
use crate::stats::GrowthStats;

/// A window `[offset, offset + len)` onto a shared buffer, with room to
/// append up to `offset + cap`.
///
/// Invariant: `len <= cap` and `offset + cap <= buffer.capacity()`.
pub(crate) struct Header<T> {
    buffer: SharedBuffer<T>,
    offset: usize,
    len: usize,
    cap: usize,
    growth: GrowthPolicy,
    stats: GrowthStats,
}

impl<T> Header<T> {
    /// Take ownership of `buffer` with the first `len` slots valid.
    pub(crate) fn from_buffer(buffer: Buffer<T>, len: usize, growth: GrowthPolicy) -> Self {
        let cap = buffer.capacity();
        debug_assert!(len <= cap, "length {len} exceeds capacity {cap}");
        Self {
            buffer: buffer.into_shared(),
            offset: 0,
            len,
            cap,
            growth,
            stats: GrowthStats::default(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    pub(crate) fn stats(&self) -> GrowthStats {
        self.stats
    }

    /// Map a logical index to an absolute buffer slot.
    fn check(&self, index: usize) -> Result<usize, SequenceError> {
        if index < self.len {
            Ok(self.offset + index)
        } else {
            Err(SequenceError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    pub(crate) fn storage_id(&self) -> StorageId {
        self.buffer.borrow().id()
    }

    pub(crate) fn shares_storage(&self, other: &Header<T>) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer)
    }

    pub(crate) fn address_of(&self, index: usize) -> Result<ElementRef, SequenceError> {
        let slot = self.check(index)?;
        Ok(ElementRef::new(self.storage_id(), slot))
    }

    pub(crate) fn set(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        let slot = self.check(index)?;
        self.buffer.borrow_mut().put(slot, value);
        Ok(())
    }

    pub(crate) fn as_slice(&self) -> Ref<'_, [T]> {
        let (offset, len) = (self.offset, self.len);
        Ref::map(self.buffer.borrow(), |b| b.slice(offset, len))
    }

    pub(crate) fn as_mut_slice(&mut self) -> RefMut<'_, [T]> {
        let (offset, len) = (self.offset, self.len);
        RefMut::map(self.buffer.borrow_mut(), |b| b.slice_mut(offset, len))
    }

    /// A new header over `[start, end)` sharing this header's buffer.
    ///
    /// The new header's capacity runs to the end of this header's capacity,
    /// not just to `end`.
    pub(crate) fn slice(&self, start: usize, end: usize) -> Result<Self, SequenceError> {
        if end > self.len {
            return Err(SequenceError::IndexOutOfRange {
                index: end,
                len: self.len,
            });
        }
        if start > end {
            return Err(SequenceError::IndexOutOfRange {
                index: start,
                len: self.len,
            });
        }
        trace!(storage = %self.storage_id(), start, end, "created shared view");
        Ok(Self {
            buffer: Rc::clone(&self.buffer),
            offset: self.offset + start,
            len: end - start,
            cap: self.cap - start,
            growth: self.growth,
            stats: GrowthStats::default(),
        })
    }

    pub(crate) fn fmt_debug(&self, name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Debug,
    {
        f.debug_struct(name)
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .field("storage", &self.storage_id())
            .field("elements", &&*self.as_slice())
            .finish()
    }

    /// Space-separated elements in brackets: `[a b c]`.
    pub(crate) fn fmt_elements(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        f.write_str("[")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: Clone> Header<T> {
    pub(crate) fn get(&self, index: usize) -> Result<T, SequenceError> {
        let slot = self.check(index)?;
        Ok(self.buffer.borrow().slice(slot, 1)[0].clone())
    }

    pub(crate) fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T: Clone + Default> Header<T> {
    /// Append in place when there is headroom, otherwise move to a larger
    /// buffer chosen by the growth policy.
    ///
    /// Writing into headroom of a shared buffer is visible to every other
    /// header over that buffer whose window covers the slot.
    pub(crate) fn append(&mut self, value: T) {
        if self.len < self.cap {
            let slot = self.offset + self.len;
            self.buffer.borrow_mut().put(slot, value);
            self.len += 1;
            return;
        }

        let new_cap = self.growth.next_capacity(self.cap);
        let mut fresh = Buffer::new(new_cap);
        fresh
            .slice_mut(0, self.len)
            .clone_from_slice(&self.as_slice());
        fresh.put(self.len, value);
        trace!(
            from = %self.storage_id(),
            to = %fresh.id(),
            old_capacity = self.cap,
            new_capacity = new_cap,
            copied = self.len,
            "reallocated sequence storage"
        );

        self.stats.record_reallocation(self.len);
        self.buffer = fresh.into_shared();
        self.offset = 0;
        self.cap = new_cap;
        self.len += 1;
    }

    /// Copy the valid elements into a new, unshared buffer of the same
    /// capacity.
    pub(crate) fn detach(&self) -> Self {
        let mut fresh = Buffer::new(self.cap);
        fresh
            .slice_mut(0, self.len)
            .clone_from_slice(&self.as_slice());
        Self {
            buffer: fresh.into_shared(),
            offset: 0,
            len: self.len,
            cap: self.cap,
            growth: self.growth,
            stats: GrowthStats::default(),
        }
    }
}

impl<T> Clone for Header<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: Rc::clone(&self.buffer),
            offset: self.offset,
            len: self.len,
            cap: self.cap,
            growth: self.growth,
            stats: self.stats,
        }
    }
}
