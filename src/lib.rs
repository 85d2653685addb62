//! Arrayish - a growable, hole-tolerant indexed sequence with live cursors
//!
//! # Overview
//!
//! [`IndexedSequence`] is an ordered container addressed by position. It
//! behaves like a dynamic-language array rather than a `Vec`:
//!
//! - Reading past the end yields an absent value instead of panicking
//! - Writing past the end grows the sequence, leaving holes behind
//! - Every operation takes `&self`, so a sequence can be changed while
//!   callbacks or cursors are reading it
//!
//! # Quick Start
//!
//! ```
//! use arrayish::IndexedSequence;
//!
//! let seq = IndexedSequence::of([3, 1, 2]);
//! seq.push([10]);
//!
//! // Default ordering compares textual forms.
//! seq.sort();
//! assert_eq!(seq.to_string(), "1,10,2,3");
//!
//! // Numeric ordering needs a comparator.
//! seq.sort_by(|a, b| f64::from(a - b)).unwrap();
//! assert_eq!(seq.join(" "), "1 2 3 10");
//!
//! let evens = seq.filter(|x, _, _| x % 2 == 0);
//! assert_eq!(evens.to_string(), "2,10");
//! ```
//!
//! # Cursors
//!
//! [`keys`](IndexedSequence::keys), [`values`](IndexedSequence::values) and
//! [`entries`](IndexedSequence::entries) return cursors that read the
//! sequence as it is at each pull:
//!
//! ```
//! use arrayish::IndexedSequence;
//!
//! let seq = IndexedSequence::of(["a"]);
//! let mut entries = seq.entries();
//! assert_eq!(entries.next(), Some((0, Some("a"))));
//!
//! seq.push(["b"]);
//! assert_eq!(entries.next(), Some((1, Some("b"))));
//! assert_eq!(entries.next(), None);
//! ```
//!
//! # Errors
//!
//! Failing operations return [`SequenceError`], which implements
//! [`miette::Diagnostic`]. Use [`render_error`] or [`render_error_to`] to
//! print one with its code and help text.

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from arrayish_core
pub use arrayish_core::{
    EntryCursor, Entries, INLINE_SLOTS, IndexedSequence, KeyCursor, Keys, PositionalCursor,
    Projection, Result, SequenceError, Spread, ValueCursor, Values,
};
pub use arrayish_core::{cursor, error, sequence};
