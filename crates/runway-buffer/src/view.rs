//! Shared views produced by re-slicing.
//!
//! A [`SequenceView`] is a window onto another sequence's buffer. Writes
//! through the view land in that buffer and are visible to every sequence
//! or view whose window covers the slot. The sharing ends for a given side
//! once that side's own append reallocates.
//!
//! Mutating the same buffer through two handles is a caller concern: the
//! handles are `!Send`, and overlapping `as_slice`/`as_mut_slice` borrows
//! panic rather than alias.

use std::cell::{Ref, RefMut};
use std::fmt;

use runway_core::{ElementRef, SequenceError, SequenceRead, SequenceWrite, StorageId};

use crate::header::Header;
use crate::sequence::GrowableSequence;
use crate::stats::GrowthStats;

/// A window `[start, end)` onto a shared buffer.
///
/// Indices are relative to the view's start. The view's capacity extends to
/// the end of the parent's capacity, so an append with headroom writes into
/// the parent's storage (possibly over parent elements past the view's end).
pub struct SequenceView<T> {
    header: Header<T>,
}

impl<T> SequenceView<T> {
    pub(crate) fn from_header(header: Header<T>) -> Self {
        Self { header }
    }

    pub(crate) fn header(&self) -> &Header<T> {
        &self.header
    }

    /// Number of elements visible through the view.
    pub fn len(&self) -> usize {
        self.header.len()
    }

    /// Remaining room in the shared buffer from the view's start.
    pub fn capacity(&self) -> usize {
        self.header.capacity()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.header.len() == 0
    }

    /// Reallocation counters accumulated by appends through this view.
    pub fn growth_stats(&self) -> GrowthStats {
        self.header.stats()
    }

    /// Identity of the buffer the view currently points into.
    pub fn storage_id(&self) -> StorageId {
        self.header.storage_id()
    }

    /// Identity of the slot backing `index`.
    pub fn address_of(&self, index: usize) -> Result<ElementRef, SequenceError> {
        self.header.address_of(index)
    }

    /// Whether the view still points into `sequence`'s buffer.
    pub fn shares_storage_with(&self, sequence: &GrowableSequence<T>) -> bool {
        sequence.shares_storage_with(self)
    }

    /// Replace the element at `index` (relative to the view's start).
    pub fn set(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        self.header.set(index, value)
    }

    /// Borrow the visible elements.
    ///
    /// # Panics
    ///
    /// Panics if a mutable borrow of the same buffer is live.
    pub fn as_slice(&self) -> Ref<'_, [T]> {
        self.header.as_slice()
    }

    /// Mutably borrow the visible elements.
    ///
    /// # Panics
    ///
    /// Panics if any other borrow of the same buffer is live.
    pub fn as_mut_slice(&mut self) -> RefMut<'_, [T]> {
        self.header.as_mut_slice()
    }

    /// Re-slice this view. Bounds are relative to the view.
    pub fn slice(&self, start: usize, end: usize) -> Result<SequenceView<T>, SequenceError> {
        self.header.slice(start, end).map(Self::from_header)
    }
}

impl<T: Clone> SequenceView<T> {
    /// Read the element at `index` (relative to the view's start).
    pub fn get(&self, index: usize) -> Result<T, SequenceError> {
        self.header.get(index)
    }

    /// Copy the visible elements out.
    pub fn to_vec(&self) -> Vec<T> {
        self.header.to_vec()
    }
}

impl<T: Clone + Default> SequenceView<T> {
    /// Append through the view.
    ///
    /// With headroom this writes into the shared buffer; when full the view
    /// moves to a private buffer and stops sharing.
    pub fn append(&mut self, value: T) {
        self.header.append(value);
    }

    /// Copy the visible elements into an independent sequence with the
    /// view's capacity.
    pub fn detach(&self) -> GrowableSequence<T> {
        GrowableSequence::from_header(self.header.detach())
    }
}

impl<T> Clone for SequenceView<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for SequenceView<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.as_slice() == *other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header.fmt_debug("SequenceView", f)
    }
}

impl<T: fmt::Display> fmt::Display for SequenceView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header.fmt_elements(f)
    }
}

impl<T: Clone> SequenceRead<T> for SequenceView<T> {
    fn len(&self) -> usize {
        self.header.len()
    }

    fn capacity(&self) -> usize {
        self.header.capacity()
    }

    fn get(&self, index: usize) -> Result<T, SequenceError> {
        self.header.get(index)
    }

    fn address_of(&self, index: usize) -> Result<ElementRef, SequenceError> {
        self.header.address_of(index)
    }

    fn storage_id(&self) -> StorageId {
        self.header.storage_id()
    }
}

impl<T: Clone + Default> SequenceWrite<T> for SequenceView<T> {
    fn set(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        self.header.set(index, value)
    }

    fn append(&mut self, value: T) {
        self.header.append(value);
    }
}
