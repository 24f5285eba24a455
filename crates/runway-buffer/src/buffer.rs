//! Fixed-capacity backing storage.
//!
//! A [`Buffer`] is a contiguous boxed slice allocated to full capacity at
//! creation and never resized. Growth happens one level up: a full sequence
//! allocates a larger buffer and copies into it. Buffers are shared between
//! a sequence and its views through [`SharedBuffer`].

use std::cell::RefCell;
use std::rc::Rc;

use runway_core::StorageId;

/// A fixed-capacity contiguous allocation stamped with a [`StorageId`].
///
/// Every slot always holds a value: slots past a sequence's length carry
/// `T::default()` (or whatever an earlier, now-absent element left behind)
/// and are simply not addressable through the sequence API.
#[derive(Debug)]
pub struct Buffer<T> {
    id: StorageId,
    slots: Box<[T]>,
}

/// Reference-counted handle to a buffer shared by a sequence and its views.
///
/// Single-threaded by construction (`Rc`), so aliasing views can never be
/// mutated from two threads.
pub type SharedBuffer<T> = Rc<RefCell<Buffer<T>>>;

impl<T: Default> Buffer<T> {
    /// Allocate `capacity` default-initialised slots.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, T::default);
        Self::from_vec(slots)
    }
}

impl<T> Buffer<T> {
    /// Adopt `values` as a buffer whose capacity equals its length.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            id: StorageId::next(),
            slots: values.into_boxed_slice(),
        }
    }

    /// Identity of this allocation.
    pub fn id(&self) -> StorageId {
        self.id
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get a shared slice of `len` slots starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the buffer's capacity. Sequences
    /// bounds-check before reaching here.
    pub fn slice(&self, offset: usize, len: usize) -> &[T] {
        &self.slots[offset..offset + len]
    }

    /// Get a mutable slice of `len` slots starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the buffer's capacity.
    pub fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [T] {
        &mut self.slots[offset..offset + len]
    }

    /// Overwrite a single slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= capacity()`.
    pub fn put(&mut self, slot: usize, value: T) {
        self.slots[slot] = value;
    }

    /// Wrap this buffer in an `Rc<RefCell<_>>` for sharing.
    pub fn into_shared(self) -> SharedBuffer<T> {
        Rc::new(RefCell::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_default_filled() {
        let buf: Buffer<i32> = Buffer::new(8);
        assert_eq!(buf.capacity(), 8);
        assert!(buf.slice(0, 8).iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_capacity_buffer() {
        let buf: Buffer<String> = Buffer::new(0);
        assert_eq!(buf.capacity(), 0);
        assert!(buf.slice(0, 0).is_empty());
    }

    #[test]
    fn from_vec_keeps_values() {
        let buf = Buffer::from_vec(vec![1, 2, 3]);
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.slice(1, 2), &[2, 3]);
    }

    #[test]
    fn each_buffer_has_its_own_id() {
        let a: Buffer<u8> = Buffer::new(4);
        let b: Buffer<u8> = Buffer::new(4);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn put_and_slice_mut_write_through() {
        let mut buf: Buffer<u32> = Buffer::new(4);
        buf.put(3, 9);
        buf.slice_mut(0, 2).copy_from_slice(&[5, 6]);
        assert_eq!(buf.slice(0, 4), &[5, 6, 0, 9]);
    }

    #[test]
    fn shared_handles_see_same_storage() {
        let shared = Buffer::from_vec(vec![1u8, 2]).into_shared();
        let other = Rc::clone(&shared);
        other.borrow_mut().put(0, 42);
        assert_eq!(shared.borrow().slice(0, 1), &[42]);
        assert_eq!(Rc::strong_count(&shared), 2);
    }

    #[test]
    #[should_panic]
    fn slice_past_capacity_panics() {
        let buf: Buffer<u8> = Buffer::new(2);
        let _ = buf.slice(1, 2);
    }
}
