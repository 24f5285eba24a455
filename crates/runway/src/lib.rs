//! Runway: growable sequences with amortized doubling and shared views.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Runway sub-crates. For most users, adding `runway` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use runway::prelude::*;
//!
//! let mut words: GrowableSequence<String> = GrowableSequence::new();
//! for w in ["abacus", "charlie", "zeta"] {
//!     words.append(w.to_string());
//! }
//! assert_eq!(words.len(), 3);
//! assert_eq!(words.capacity(), 4);
//!
//! let numbers = GrowableSequence::from_values(vec![1, 2, 3, 4, 5]);
//! let mut middle = numbers.slice(1, 3).unwrap();
//! middle.set(0, 20).unwrap();
//! assert_eq!(numbers.get(1).unwrap(), 20);
//!
//! assert!(matches!(
//!     numbers.get(5),
//!     Err(SequenceError::IndexOutOfRange { index: 5, len: 5 })
//! ));
//!
//! let table = JaggedTable::triangular(3, |i, j| i + j);
//! assert_eq!(table.to_string(), "[[0] [1 2] [2 3 4]]");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `runway-core` | Errors, storage ids, growth policy, traits |
//! | [`buffer`] | `runway-buffer` | Buffers, sequences, views, tables, config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Buffers, sequences, views, and tables (`runway-buffer`).
///
/// Most users only need [`buffer::GrowableSequence`] and
/// [`buffer::SequenceView`], which are also in the [`prelude`].
pub use runway_buffer as buffer;

/// Errors, storage identity tokens, growth policy, and the
/// [`types::SequenceRead`] / [`types::SequenceWrite`] traits (`runway-core`).
pub use runway_core as types;

/// Common imports for typical Runway usage.
///
/// ```rust
/// use runway::prelude::*;
/// ```
pub mod prelude {
    // Storage
    pub use runway_buffer::{
        GrowableSequence, GrowthStats, JaggedTable, SequenceConfig, SequenceView,
    };

    // Core types and traits
    pub use runway_core::{ElementRef, GrowthPolicy, SequenceRead, SequenceWrite, StorageId};

    // Errors
    pub use runway_core::SequenceError;
}
