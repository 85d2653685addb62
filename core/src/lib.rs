//! Core of `arrayish`: a resizable indexed sequence and its positional cursors.
//!
//! - [`IndexedSequence`]: the container. Reads past the end yield absent
//!   slots, writes past the end grow it with holes.
//! - [`PositionalCursor`]: a live, single-pass cursor, instantiated as
//!   [`KeyCursor`], [`ValueCursor`] and [`EntryCursor`].
//! - [`SequenceError`]: the few ways an operation can fail.
#![deny(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod sequence;

#[cfg(feature = "serde")]
mod serde_impl;

pub use cursor::{
    EntryCursor, Entries, KeyCursor, Keys, PositionalCursor, Projection, ValueCursor, Values,
};
pub use error::{Result, SequenceError};
pub use sequence::{INLINE_SLOTS, IndexedSequence, Spread};
