//! Growable sequences over fixed-capacity, shareable buffers.
//!
//! # Architecture
//!
//! ```text
//! GrowableSequence<T> ─┐
//!                      ├── Header (offset, len, cap, growth policy, stats)
//! SequenceView<T> ─────┘      └── SharedBuffer = Rc<RefCell<Buffer<T>>>
//!                                    └── Box<[T]> + StorageId
//! JaggedTable<T> = GrowableSequence<GrowableSequence<T>>
//! ```
//!
//! # Growth
//!
//! Appending to a sequence with `len < capacity` writes into the existing
//! buffer. Appending to a full sequence allocates a new buffer of
//! `max(1, 2 * capacity)` slots (see [`GrowthPolicy`](runway_core::GrowthPolicy)),
//! copies the elements across, and drops this header's reference to the old
//! buffer. Total copying across `k` appends is bounded by `2k`.
//!
//! # Sharing
//!
//! [`GrowableSequence::slice`] returns a [`SequenceView`] pointing into the
//! same buffer. Writes through either are visible through the other until
//! one of them reallocates. Buffers are `Rc`-shared, so sequences are
//! confined to one thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
mod header;
pub mod sequence;
pub mod stats;
pub mod table;
pub mod view;

// Public re-exports for the primary API surface.
pub use buffer::{Buffer, SharedBuffer};
pub use config::SequenceConfig;
pub use sequence::GrowableSequence;
pub use stats::GrowthStats;
pub use table::JaggedTable;
pub use view::SequenceView;
