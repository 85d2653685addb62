//! Mutating operations. All of them act on the receiver in place.
//!
//! Items supplied by the caller are collected before the storage is borrowed,
//! so an iterator that reads the receiver itself is fine.

use super::range::{resolve, resolve_end};
use super::{IndexedSequence, Slots};

impl<T> IndexedSequence<T> {
    /// Appends `items`, returning the new length.
    pub fn push(&self, items: impl IntoIterator<Item = T>) -> usize {
        let items: Slots<T> = items.into_iter().map(Some).collect();
        self.with_slots_mut(|slots| {
            slots.extend(items);
            slots.len()
        })
    }

    /// Removes the last slot and returns its value.
    ///
    /// Returns `None` if the sequence is empty or the last slot is a hole.
    pub fn pop(&self) -> Option<T> {
        self.with_slots_mut(|slots| slots.pop().flatten())
    }

    /// Removes the first slot and returns its value, shifting the rest down.
    pub fn shift(&self) -> Option<T> {
        self.with_slots_mut(|slots| {
            if slots.is_empty() {
                None
            } else {
                slots.remove(0)
            }
        })
    }

    /// Inserts `items` at the front, returning the new length.
    pub fn unshift(&self, items: impl IntoIterator<Item = T>) -> usize {
        let items: Slots<T> = items.into_iter().map(Some).collect();
        self.with_slots_mut(|slots| {
            slots.insert_many(0, items);
            slots.len()
        })
    }

    /// Removes `delete_count` slots starting at `start` and inserts `items` in
    /// their place. Returns the removed slots.
    ///
    /// `start` may be negative. `delete_count = None` removes everything from
    /// `start` on; larger counts are clamped.
    ///
    /// # Examples
    /// ```
    /// use arrayish_core::IndexedSequence;
    ///
    /// let seq = IndexedSequence::of([1, 2, 3, 4]);
    /// let removed = seq.splice(1, Some(2), [9]);
    /// assert_eq!(removed, IndexedSequence::of([2, 3]));
    /// assert_eq!(seq, IndexedSequence::of([1, 9, 4]));
    /// ```
    pub fn splice(
        &self,
        start: isize,
        delete_count: Option<usize>,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        let items: Slots<T> = items.into_iter().map(Some).collect();
        let removed = self.with_slots_mut(|slots| {
            let len = slots.len();
            let start = resolve(start, len);
            let available = len - start;
            let delete_count = delete_count.map_or(available, |count| count.min(available));
            let removed: Slots<T> = slots.drain(start..start + delete_count).collect();
            slots.insert_many(start, items);
            removed
        });
        Self::from_raw(removed)
    }

    /// Reverses the slots in place.
    pub fn reverse(&self) -> &Self {
        self.with_slots_mut(|slots| slots.reverse());
        self
    }
}

impl<T: Clone> IndexedSequence<T> {
    /// Overwrites `[start, end)` with copies of `value`.
    pub fn fill(&self, value: T, start: isize, end: Option<isize>) -> &Self {
        self.with_slots_mut(|slots| {
            let len = slots.len();
            let from = resolve(start, len);
            let to = resolve_end(end, len);
            if from < to {
                for slot in &mut slots[from..to] {
                    *slot = Some(value.clone());
                }
            }
        });
        self
    }

    /// Copies `[start, end)` to `target`. Never changes the length.
    ///
    /// Overlapping ranges behave as if the source were copied out first.
    ///
    /// # Examples
    /// ```
    /// use arrayish_core::IndexedSequence;
    ///
    /// let seq = IndexedSequence::of([1, 2, 3, 4, 5, 6, 7]);
    /// seq.copy_within(1, 4, Some(6));
    /// assert_eq!(seq, IndexedSequence::of([1, 5, 6, 4, 5, 6, 7]));
    /// ```
    pub fn copy_within(&self, target: isize, start: isize, end: Option<isize>) -> &Self {
        self.with_slots_mut(|slots| {
            let len = slots.len();
            let to = resolve(target, len);
            let from = resolve(start, len);
            let fin = resolve_end(end, len);
            let count = fin.saturating_sub(from).min(len - to);

            // Walk backwards when the destination overlaps the tail of the source.
            if from < to && to < from + count {
                for offset in (0..count).rev() {
                    slots[to + offset] = slots[from + offset].clone();
                }
            } else {
                for offset in 0..count {
                    slots[to + offset] = slots[from + offset].clone();
                }
            }
        });
        self
    }
}
