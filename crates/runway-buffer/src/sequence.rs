//! The owning growable sequence.

use std::cell::{Ref, RefMut};
use std::fmt;

use runway_core::{
    ElementRef, GrowthPolicy, SequenceError, SequenceRead, SequenceWrite, StorageId,
};

use crate::buffer::Buffer;
use crate::config::SequenceConfig;
use crate::header::Header;
use crate::stats::GrowthStats;
use crate::view::SequenceView;

/// A length-bounded sequence over a fixed-capacity buffer that reallocates
/// (by doubling, unless configured otherwise) when an append finds it full.
///
/// Positions `[0, len)` are readable and writable. Positions
/// `[len, capacity)` are allocated headroom that only [`append`] may fill.
///
/// Cloning a sequence copies the header, not the elements: the clone shares
/// the buffer until either side reallocates. Use [`detach`] for a deep copy.
///
/// [`append`]: GrowableSequence::append
/// [`detach`]: GrowableSequence::detach
pub struct GrowableSequence<T> {
    header: Header<T>,
}

impl<T> GrowableSequence<T> {
    /// An empty sequence with zero capacity. Does not allocate.
    pub fn new() -> Self {
        Self::from_values(Vec::new())
    }

    /// Adopt `values` with `len == capacity == values.len()`.
    pub fn from_values(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            header: Header::from_buffer(Buffer::from_vec(values), len, GrowthPolicy::Doubling),
        }
    }

    pub(crate) fn from_header(header: Header<T>) -> Self {
        Self { header }
    }

    /// Number of logically present elements.
    pub fn len(&self) -> usize {
        self.header.len()
    }

    /// Number of elements the current buffer can hold before reallocating.
    pub fn capacity(&self) -> usize {
        self.header.capacity()
    }

    /// Whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.header.len() == 0
    }

    /// The growth policy applied on reallocation.
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.header.growth()
    }

    /// Reallocation counters accumulated by this sequence's appends.
    pub fn growth_stats(&self) -> GrowthStats {
        self.header.stats()
    }

    /// Identity of the current backing buffer.
    pub fn storage_id(&self) -> StorageId {
        self.header.storage_id()
    }

    /// Identity of the slot backing `index`.
    pub fn address_of(&self, index: usize) -> Result<ElementRef, SequenceError> {
        self.header.address_of(index)
    }

    /// Whether `self` and `view` currently read and write the same buffer.
    pub fn shares_storage_with(&self, view: &SequenceView<T>) -> bool {
        self.header.shares_storage(view.header())
    }

    /// Replace the element at `index`.
    ///
    /// Fails for `index >= len()` even if the slot lies within capacity.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        self.header.set(index, value)
    }

    /// Borrow the valid elements.
    ///
    /// # Panics
    ///
    /// Panics if a view over the same buffer currently holds
    /// [`SequenceView::as_mut_slice`].
    pub fn as_slice(&self) -> Ref<'_, [T]> {
        self.header.as_slice()
    }

    /// Mutably borrow the valid elements.
    ///
    /// # Panics
    ///
    /// Panics if any other borrow of the same buffer is live.
    pub fn as_mut_slice(&mut self) -> RefMut<'_, [T]> {
        self.header.as_mut_slice()
    }

    /// A view over `[start, end)` that shares this sequence's buffer.
    ///
    /// Requires `start <= end <= len()`. The view's capacity is
    /// `capacity() - start`, so appending to the view writes into this
    /// sequence's storage until the view reallocates.
    pub fn slice(&self, start: usize, end: usize) -> Result<SequenceView<T>, SequenceError> {
        self.header.slice(start, end).map(SequenceView::from_header)
    }
}

impl<T: Default> GrowableSequence<T> {
    /// `len` default-initialised elements, capacity equal to `len`.
    pub fn with_len(len: usize) -> Self {
        Self {
            header: Header::from_buffer(Buffer::new(len), len, GrowthPolicy::Doubling),
        }
    }

    /// `len` default-initialised elements with room for `capacity`.
    ///
    /// Fails with [`SequenceError::InvalidArgument`] if `capacity < len`.
    pub fn with_len_and_capacity(len: usize, capacity: usize) -> Result<Self, SequenceError> {
        Self::from_config(&SequenceConfig::new(len).capacity(capacity))
    }

    /// Build a sequence from a validated [`SequenceConfig`].
    pub fn from_config(config: &SequenceConfig) -> Result<Self, SequenceError> {
        config.validate()?;
        let buffer = Buffer::new(config.resolved_capacity());
        Ok(Self {
            header: Header::from_buffer(buffer, config.length, config.growth),
        })
    }
}

impl<T: Clone> GrowableSequence<T> {
    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<T, SequenceError> {
        self.header.get(index)
    }

    /// Copy the valid elements out.
    pub fn to_vec(&self) -> Vec<T> {
        self.header.to_vec()
    }
}

impl<T: Clone + Default> GrowableSequence<T> {
    /// Append `value`, reallocating first if `len() == capacity()`.
    ///
    /// With headroom the storage identity is preserved; otherwise the
    /// elements move to a new buffer of `growth_policy().next_capacity()`
    /// slots and every [`ElementRef`] taken earlier goes stale.
    pub fn append(&mut self, value: T) {
        self.header.append(value);
    }

    /// A deep copy in a new buffer of the same capacity.
    pub fn detach(&self) -> Self {
        Self::from_header(self.header.detach())
    }
}

impl<T> Default for GrowableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for GrowableSequence<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
        }
    }
}

impl<T> From<Vec<T>> for GrowableSequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T> FromIterator<T> for GrowableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

impl<T: Clone + Default> Extend<T> for GrowableSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: PartialEq> PartialEq for GrowableSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.as_slice() == *other.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header.fmt_debug("GrowableSequence", f)
    }
}

impl<T: fmt::Display> fmt::Display for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header.fmt_elements(f)
    }
}

impl<T: Clone> SequenceRead<T> for GrowableSequence<T> {
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

impl<T: Clone + Default> SequenceWrite<T> for GrowableSequence<T> {
    fn set(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        self.header.set(index, value)
    }

    fn append(&mut self, value: T) {
        self.header.append(value);
    }
}
