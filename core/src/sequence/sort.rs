//! In-place sorting.
//!
//! Both orderings are stable and move holes to the end. The default ordering
//! compares the elements' textual forms by code point, so `[10, 9, 1]` sorts to
//! `[1, 10, 9]`; pass a comparator to [`IndexedSequence::sort_by`] for numeric
//! order.

use core::cmp::Ordering;
use core::fmt;

use super::{IndexedSequence, Slots, pad_with_holes};
use crate::error::{Result, SequenceError};

impl<T: fmt::Display> IndexedSequence<T> {
    /// Sorts by textual form, code point by code point.
    pub fn sort(&self) -> &Self {
        // Take the slots out so rendering elements cannot observe a borrow.
        let taken = self.with_slots_mut(core::mem::take);
        let len = taken.len();
        let mut keyed: Vec<(String, T)> = taken
            .into_iter()
            .flatten()
            .map(|value| (value.to_string(), value))
            .collect();
        keyed.sort_by(|(left, _), (right, _)| left.cmp(right));

        let mut sorted: Slots<T> = keyed.into_iter().map(|(_, value)| Some(value)).collect();
        pad_with_holes(&mut sorted, len);
        self.with_slots_mut(|slots| *slots = sorted);
        self
    }
}

impl<T: Clone> IndexedSequence<T> {
    /// Sorts with `compare`, which returns a negative, zero or positive number
    /// when its first argument orders before, with, or after the second.
    ///
    /// The comparator sees a copy of the elements; the receiver is only
    /// rewritten once sorting has succeeded.
    ///
    /// # Errors
    /// [`SequenceError::InvalidComparator`] as soon as `compare` returns `NaN`.
    /// The receiver is left untouched.
    ///
    /// # Examples
    /// ```
    /// use arrayish_core::IndexedSequence;
    ///
    /// let seq = IndexedSequence::of([10, 9, 1]);
    /// seq.sort_by(|a, b| f64::from(a - b)).unwrap();
    /// assert_eq!(seq, IndexedSequence::of([1, 9, 10]));
    /// ```
    pub fn sort_by<F>(&self, mut compare: F) -> Result<&Self>
    where
        F: FnMut(&T, &T) -> f64,
    {
        let (len, present) = self.with_slots(|slots| {
            let present: Vec<(usize, T)> = slots
                .iter()
                .enumerate()
                .filter_map(|(index, slot)| slot.clone().map(|value| (index, value)))
                .collect();
            (slots.len(), present)
        });

        let mut order = |(li, left): &(usize, T), (ri, right): &(usize, T)| {
            let result = compare(left, right);
            if result.is_nan() {
                return Err(SequenceError::InvalidComparator {
                    result,
                    left: *li,
                    right: *ri,
                });
            }
            Ok(if result < 0.0 {
                Ordering::Less
            } else if result > 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            })
        };
        let sorted = merge_sort(present, &mut order)
            .inspect_err(|err| tracing::debug!(%err, "sort aborted"))?;

        let mut slots: Slots<T> = sorted.into_iter().map(|(_, value)| Some(value)).collect();
        pad_with_holes(&mut slots, len);
        self.with_slots_mut(|current| *current = slots);
        Ok(self)
    }
}

/// Stable top-down merge sort driven by a fallible comparator.
///
/// Returns the first comparator error without finishing the sort. Unlike
/// `slice::sort_by`, an inconsistent comparator can only produce an odd order,
/// never a panic.
fn merge_sort<T, E>(
    mut items: Vec<T>,
    compare: &mut impl FnMut(&T, &T) -> core::result::Result<Ordering, E>,
) -> core::result::Result<Vec<T>, E> {
    if items.len() <= 1 {
        return Ok(items);
    }
    let back = items.split_off(items.len() / 2);
    let front = merge_sort(items, compare)?;
    let back = merge_sort(back, compare)?;

    let mut merged = Vec::with_capacity(front.len() + back.len());
    let mut front = front.into_iter().peekable();
    let mut back = back.into_iter().peekable();
    loop {
        let take_back = match (front.peek(), back.peek()) {
            (Some(left), Some(right)) => compare(left, right)? == Ordering::Greater,
            _ => break,
        };
        if take_back {
            merged.extend(back.next());
        } else {
            merged.extend(front.next());
        }
    }
    merged.extend(front);
    merged.extend(back);
    Ok(merged)
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;
