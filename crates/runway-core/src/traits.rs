//! Read and write traits shared by owning sequences and views.
//!
//! Code that only needs indexed access can be generic over
//! [`SequenceRead`] and accept either a `GrowableSequence` or a view.

use crate::error::SequenceError;
use crate::id::{ElementRef, StorageId};

/// Bounds-checked read access to a length-limited sequence.
pub trait SequenceRead<T> {
    /// Number of logically present elements.
    fn len(&self) -> usize;

    /// Number of elements the current backing storage can hold.
    fn capacity(&self) -> usize;

    /// Whether the sequence has no logically present elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at `index`.
    ///
    /// Fails with [`SequenceError::IndexOutOfRange`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<T, SequenceError>;

    /// Identity of the storage slot backing `index`.
    fn address_of(&self, index: usize) -> Result<ElementRef, SequenceError>;

    /// Identity of the current backing allocation.
    fn storage_id(&self) -> StorageId;
}

/// Mutating access: indexed writes and appends.
pub trait SequenceWrite<T>: SequenceRead<T> {
    /// Replace the element at `index`.
    ///
    /// Fails with [`SequenceError::IndexOutOfRange`] if `index >= len()`,
    /// even when `index < capacity()`.
    fn set(&mut self, index: usize, value: T) -> Result<(), SequenceError>;

    /// Append `value`, reallocating if the sequence is full.
    fn append(&mut self, value: T);
}
