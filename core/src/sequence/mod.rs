//! The resizable indexed sequence.
//!
//! An [`IndexedSequence`] is a dense run of slots `0..len`. Each slot holds a
//! value or is *absent* (a hole). Holes appear when a write lands past the end,
//! when the length is grown explicitly, or when a slot is deleted.
//!
//! # Interior mutability
//!
//! Every operation takes `&self`. The slots live behind a [`RefCell`], so the
//! sequence can be mutated while cursors returned by [`keys`], [`values`] and
//! [`entries`] still borrow it. Cursors never snapshot the sequence: each pull
//! re-reads the current length and contents.
//!
//! No storage borrow is held while user code runs (callbacks, comparators,
//! caller-provided iterators), so callbacks may freely read or mutate the
//! sequence they were handed.
//!
//! [`keys`]: IndexedSequence::keys
//! [`values`]: IndexedSequence::values
//! [`entries`]: IndexedSequence::entries
//!
//! # Examples
//!
//! ```
//! use arrayish_core::IndexedSequence;
//!
//! let seq = IndexedSequence::of([1, 2, 3]);
//! seq.set(5, 6);
//! assert_eq!(seq.len(), 6);
//! assert_eq!(seq.get(4), None);
//! assert_eq!(seq.to_string(), "1,2,3,,,6");
//! ```

use core::any::Any;
use core::cell::RefCell;
use core::fmt;
use core::iter;

use smallvec::SmallVec;

use crate::cursor::{EntryCursor, KeyCursor, PositionalCursor, ValueCursor};

pub(crate) mod range;
mod read;
mod sort;
mod spread;
mod write;

pub use spread::Spread;

/// Number of slots stored inline before a sequence spills to the heap.
pub const INLINE_SLOTS: usize = 4;

pub(crate) type Slots<T> = SmallVec<[Option<T>; INLINE_SLOTS]>;

/// Appends holes until `slots` is `len` long.
pub(crate) fn pad_with_holes<T>(slots: &mut Slots<T>, len: usize) {
    let current = slots.len();
    if current < len {
        slots.extend(iter::repeat_with(|| None).take(len - current));
    }
}

/// A resizable, ordered, index-addressable container.
pub struct IndexedSequence<T> {
    slots: RefCell<Slots<T>>,
}

impl<T> IndexedSequence<T> {
    /// Creates an empty sequence.
    pub const fn new() -> Self {
        Self {
            slots: RefCell::new(SmallVec::new_const()),
        }
    }

    pub(crate) fn from_raw(slots: Slots<T>) -> Self {
        Self {
            slots: RefCell::new(slots),
        }
    }

    /// Creates a sequence holding exactly `items`, in order.
    ///
    /// Unlike [`with_length`](Self::with_length), a single numeric item is
    /// stored as an element.
    pub fn of(items: impl IntoIterator<Item = T>) -> Self {
        items.into_iter().collect()
    }

    /// Creates a sequence of `len` absent slots.
    pub fn with_length(len: usize) -> Self {
        let mut slots = Slots::new();
        pad_with_holes(&mut slots, len);
        Self::from_raw(slots)
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self::of(items)
    }

    /// Creates a sequence from slots, where `None` marks a hole.
    ///
    /// This is the inverse of [`values`](Self::values).
    pub fn from_slots(slots: impl IntoIterator<Item = Option<T>>) -> Self {
        Self::from_raw(slots.into_iter().collect())
    }

    /// Creates a sequence by mapping each item together with its index.
    pub fn from_mapped<U, F>(items: impl IntoIterator<Item = U>, mut map: F) -> Self
    where
        F: FnMut(U, usize) -> T,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| map(item, index))
            .collect()
    }

    /// Returns `true` if `value` is an `IndexedSequence<T>`.
    pub fn is_sequence(value: &dyn Any) -> bool
    where
        T: 'static,
    {
        value.is::<Self>()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `index` is in bounds and not a hole.
    pub fn has(&self, index: usize) -> bool {
        matches!(self.slots.borrow().get(index), Some(Some(_)))
    }

    /// Stores `value` at `index`.
    ///
    /// Writing past the end grows the sequence to `index + 1`, filling the gap
    /// with absent slots.
    pub fn set(&self, index: usize, value: T) {
        let mut slots = self.slots.borrow_mut();
        let len = slots.len();
        if index >= len {
            if index > len {
                tracing::trace!(index, len, "write past end leaves holes");
            }
            pad_with_holes(&mut slots, index);
            slots.push(Some(value));
        } else {
            slots[index] = Some(value);
        }
    }

    /// Sets the length, truncating or padding with absent slots.
    pub fn set_len(&self, len: usize) {
        let mut slots = self.slots.borrow_mut();
        slots.truncate(len);
        pad_with_holes(&mut slots, len);
    }

    /// Turns the slot at `index` into a hole. The length is unchanged.
    ///
    /// Returns `true` if a value was removed.
    pub fn delete(&self, index: usize) -> bool {
        self.slots
            .borrow_mut()
            .get_mut(index)
            .and_then(Option::take)
            .is_some()
    }

    /// Returns a cursor over the indices `0..len`.
    pub fn keys(&self) -> KeyCursor<'_, T> {
        PositionalCursor::new(self)
    }

    /// Returns a cursor over the slot values; holes are yielded as `None`.
    pub fn values(&self) -> ValueCursor<'_, T> {
        PositionalCursor::new(self)
    }

    /// Returns a cursor over `(index, value)` pairs.
    pub fn entries(&self) -> EntryCursor<'_, T> {
        PositionalCursor::new(self)
    }

    /// The default iteration entry point; identical to [`values`](Self::values).
    pub fn iter(&self) -> ValueCursor<'_, T> {
        self.values()
    }

    pub(crate) fn into_slots(self) -> Slots<T> {
        self.slots.into_inner()
    }

    /// Runs `f` with shared access to the slots.
    ///
    /// `f` must not call back into user code.
    #[inline]
    pub(crate) fn with_slots<R>(&self, f: impl FnOnce(&Slots<T>) -> R) -> R {
        f(&self.slots.borrow())
    }

    /// Runs `f` with exclusive access to the slots.
    ///
    /// `f` must not call back into user code.
    #[inline]
    pub(crate) fn with_slots_mut<R>(&self, f: impl FnOnce(&mut Slots<T>) -> R) -> R {
        f(&mut self.slots.borrow_mut())
    }
}

impl<T: Clone> IndexedSequence<T> {
    /// Returns a copy of the element at `index`, or `None` when the index is
    /// out of bounds or the slot is a hole.
    pub fn get(&self, index: usize) -> Option<T> {
        self.slots.borrow().get(index).cloned().flatten()
    }

    /// Copies out every slot, holes included.
    pub fn to_slots(&self) -> Vec<Option<T>> {
        self.slots.borrow().to_vec()
    }
}

impl<T> Default for IndexedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for IndexedSequence<T> {
    fn clone(&self) -> Self {
        Self::from_raw(self.slots.borrow().clone())
    }
}

impl<T: PartialEq> PartialEq for IndexedSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.slots.borrow() == *other.slots.borrow()
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.borrow();
        let mut list = f.debug_list();
        for slot in slots.iter() {
            match slot {
                Some(value) => list.entry(value),
                None => list.entry(&format_args!("<empty>")),
            };
        }
        list.finish()
    }
}

/// Renders the elements joined by `,`, holes as empty strings.
impl<T: fmt::Display> fmt::Display for IndexedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_joined(f, ",")
    }
}

impl<T> FromIterator<T> for IndexedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_raw(items.into_iter().map(Some).collect())
    }
}

impl<T> Extend<T> for IndexedSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.slots.get_mut().extend(items.into_iter().map(Some));
    }
}

impl<T> From<Vec<T>> for IndexedSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::of(items)
    }
}

impl<T, const N: usize> From<[T; N]> for IndexedSequence<T> {
    fn from(items: [T; N]) -> Self {
        Self::of(items)
    }
}

impl<'a, T: Clone> IntoIterator for &'a IndexedSequence<T> {
    type Item = Option<T>;
    type IntoIter = ValueCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}
