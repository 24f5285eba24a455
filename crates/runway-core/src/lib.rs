//! Core types and traits for Runway growable sequences.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the storage crate and its consumers: the
//! error type, storage identity tokens, the growth policy, and the
//! read/write traits implemented by sequences and views.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod growth;
pub mod id;
pub mod traits;

pub use error::SequenceError;
pub use growth::GrowthPolicy;
pub use id::{ElementRef, StorageId};
pub use traits::{SequenceRead, SequenceWrite};
