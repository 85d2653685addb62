//! Positional cursors over an [`IndexedSequence`].
//!
//! One engine, [`PositionalCursor`], is instantiated three times with a
//! zero-sized projection: [`Keys`], [`Values`] and [`Entries`].
//!
//! A cursor borrows its sequence and owns nothing but a position counter. It
//! never snapshots: each pull reads the sequence's current length, so
//! truncating the sequence mid-iteration skips the dropped elements and ends
//! the cursor early, while appending makes new elements reachable.
//!
//! Once a pull has found `position >= len` the cursor is exhausted for good,
//! even if the sequence grows again later.
//!
//! ```
//! use arrayish_core::IndexedSequence;
//!
//! let seq = IndexedSequence::of([1, 2, 3]);
//! let mut values = seq.values();
//! assert_eq!(values.next(), Some(Some(1)));
//!
//! seq.set_len(1);
//! assert_eq!(values.next(), None);
//!
//! seq.push([4, 5]);
//! assert_eq!(values.next(), None);
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::sequence::IndexedSequence;

/// What a cursor yields for one position.
pub trait Projection<T> {
    type Item;

    /// Name used when rendering a cursor.
    const NAME: &'static str;

    /// Reads position `index` of `sequence`, which is known to be in bounds.
    fn project(sequence: &IndexedSequence<T>, index: usize) -> Self::Item;
}

/// Projects the index itself.
#[derive(Debug, Clone, Copy)]
pub struct Keys;

/// Projects the slot value; holes come out as `None`.
#[derive(Debug, Clone, Copy)]
pub struct Values;

/// Projects `(index, value)`.
#[derive(Debug, Clone, Copy)]
pub struct Entries;

impl<T> Projection<T> for Keys {
    type Item = usize;
    const NAME: &'static str = "KeyCursor";

    #[inline]
    fn project(_: &IndexedSequence<T>, index: usize) -> usize {
        index
    }
}

impl<T: Clone> Projection<T> for Values {
    type Item = Option<T>;
    const NAME: &'static str = "ValueCursor";

    #[inline]
    fn project(sequence: &IndexedSequence<T>, index: usize) -> Option<T> {
        sequence.get(index)
    }
}

impl<T: Clone> Projection<T> for Entries {
    type Item = (usize, Option<T>);
    const NAME: &'static str = "EntryCursor";

    #[inline]
    fn project(sequence: &IndexedSequence<T>, index: usize) -> (usize, Option<T>) {
        (index, sequence.get(index))
    }
}

pub type KeyCursor<'a, T> = PositionalCursor<'a, T, Keys>;
pub type ValueCursor<'a, T> = PositionalCursor<'a, T, Values>;
pub type EntryCursor<'a, T> = PositionalCursor<'a, T, Entries>;

/// A single-pass reader over a borrowed sequence.
///
/// Obtained from [`IndexedSequence::keys`], [`IndexedSequence::values`],
/// [`IndexedSequence::entries`] or by iterating `&IndexedSequence<T>`.
pub struct PositionalCursor<'a, T, P> {
    sequence: &'a IndexedSequence<T>,
    position: usize,
    exhausted: bool,
    projection: PhantomData<fn() -> P>,
}

#[cfg(target_pointer_width = "64")]
static_assertions::assert_eq_size!(ValueCursor<'static, u64>, [usize; 3]);

impl<'a, T, P> PositionalCursor<'a, T, P> {
    pub(crate) fn new(sequence: &'a IndexedSequence<T>) -> Self {
        Self {
            sequence,
            position: 0,
            exhausted: false,
            projection: PhantomData,
        }
    }

    /// Number of positions pulled so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The sequence this cursor reads.
    pub fn sequence(&self) -> &'a IndexedSequence<T> {
        self.sequence
    }
}

impl<T, P: Projection<T>> Iterator for PositionalCursor<'_, T, P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        if self.exhausted {
            return None;
        }
        let len = self.sequence.len();
        if self.position >= len {
            self.exhausted = true;
            tracing::trace!(cursor = P::NAME, position = self.position, len, "cursor exhausted");
            return None;
        }
        let item = P::project(self.sequence, self.position);
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The sequence may shrink or grow between pulls.
        if self.exhausted {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<T, P: Projection<T>> FusedIterator for PositionalCursor<'_, T, P> {}

impl<T, P: Projection<T>> fmt::Debug for PositionalCursor<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(P::NAME)
            .field("position", &self.position)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

/// Renders as `ValueCursor { index: 1, array: 1,2,3 }`.
impl<T: fmt::Display, P: Projection<T>> fmt::Display for PositionalCursor<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ index: {}, array: {} }}",
            P::NAME,
            self.position,
            self.sequence
        )
    }
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
