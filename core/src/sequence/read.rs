//! Non-mutating operations. None of these change the receiver.

use core::fmt;
use core::ops::ControlFlow;

use smallvec::SmallVec;

use super::range::{resolve, resolve_end};
use super::{IndexedSequence, Slots, Spread};
use crate::error::{Result, SequenceError};

impl<T: Clone> IndexedSequence<T> {
    /// Visits the present slots of the first `len()` positions, front to back.
    ///
    /// The length is captured once; each element is read live right before
    /// `step` sees it, so slots removed by `step` are skipped.
    fn scan<B>(&self, mut step: impl FnMut(T, usize) -> ControlFlow<B>) -> Option<B> {
        let len = self.len();
        for index in 0..len {
            if let Some(value) = self.get(index) {
                if let ControlFlow::Break(found) = step(value, index) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Back-to-front counterpart of [`scan`](Self::scan).
    fn scan_rev<B>(&self, mut step: impl FnMut(T, usize) -> ControlFlow<B>) -> Option<B> {
        let len = self.len();
        for index in (0..len).rev() {
            if let Some(value) = self.get(index) {
                if let ControlFlow::Break(found) = step(value, index) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Copies the half-open range `[start, end)` into a new sequence.
    ///
    /// Negative bounds count back from the end; `end = None` means `len()`.
    ///
    /// # Examples
    /// ```
    /// use arrayish_core::IndexedSequence;
    ///
    /// let seq = IndexedSequence::of(["a", "b", "c", "d"]);
    /// assert_eq!(seq.slice(1, Some(-1)), IndexedSequence::of(["b", "c"]));
    /// assert_eq!(seq.slice(-2, None), IndexedSequence::of(["c", "d"]));
    /// ```
    pub fn slice(&self, start: isize, end: Option<isize>) -> Self {
        self.with_slots(|slots| {
            let len = slots.len();
            let from = resolve(start, len);
            let to = resolve_end(end, len);
            if to <= from {
                return Self::new();
            }
            Self::from_raw(slots[from..to].iter().cloned().collect())
        })
    }

    /// Returns the receiver's slots followed by each item.
    ///
    /// A [`Spread::Sequence`] item is spliced in slot by slot, holes included.
    /// Only real sequences are flattened; nothing else is inspected.
    pub fn concat(&self, items: impl IntoIterator<Item = Spread<T>>) -> Self {
        let mut out: Slots<T> = self.with_slots(|slots| slots.clone());
        for item in items {
            match item {
                Spread::Element(value) => out.push(Some(value)),
                Spread::Sequence(sequence) => out.extend(sequence.into_slots()),
            }
        }
        Self::from_raw(out)
    }

    /// Index of the first element equal to `value`, searching from `from_index`.
    pub fn index_of(&self, value: &T, from_index: isize) -> Option<usize>
    where
        T: PartialEq,
    {
        self.with_slots(|slots| {
            let from = resolve(from_index, slots.len());
            slots[from..]
                .iter()
                .position(|slot| slot.as_ref() == Some(value))
                .map(|offset| from + offset)
        })
    }

    /// Index of the last element equal to `value`, searching backwards from
    /// `from_index` (`None` means the last index).
    pub fn last_index_of(&self, value: &T, from_index: Option<isize>) -> Option<usize>
    where
        T: PartialEq,
    {
        self.with_slots(|slots| {
            let last = slots.len().checked_sub(1)?;
            let start = match from_index {
                None => last,
                Some(n) if n >= 0 => (n as usize).min(last),
                Some(n) => slots.len().checked_sub(n.unsigned_abs())?,
            };
            (0..=start).rev().find(|&index| slots[index].as_ref() == Some(value))
        })
    }

    /// Strict-equality membership test starting at `from_index`.
    pub fn includes(&self, value: &T, from_index: isize) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value, from_index).is_some()
    }

    /// First element for which `predicate(value, index, sequence)` holds.
    pub fn find<F>(&self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.scan(|value, index| {
            if predicate(&value, index, self) {
                ControlFlow::Break(value)
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// Index of the first element for which `predicate` holds.
    pub fn find_index<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.scan(|value, index| {
            if predicate(&value, index, self) {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// `true` unless some element fails `predicate`. Stops at the first failure.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.scan(|value, index| {
            if predicate(&value, index, self) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_none()
    }

    /// `true` if some element satisfies `predicate`. Stops at the first match.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        self.scan(|value, index| {
            if predicate(&value, index, self) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_some()
    }

    /// Elements satisfying `predicate`, in order. Holes are dropped.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize, &Self) -> bool,
    {
        let mut out = Slots::new();
        self.scan(|value, index| {
            if predicate(&value, index, self) {
                out.push(Some(value));
            }
            ControlFlow::<()>::Continue(())
        });
        Self::from_raw(out)
    }

    /// Calls `callback` for every present element.
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        self.scan(|value, index| {
            callback(&value, index, self);
            ControlFlow::<()>::Continue(())
        });
    }

    /// Applies `transform` to every present element.
    ///
    /// The result has the receiver's length; holes stay holes.
    pub fn map<U, F>(&self, mut transform: F) -> IndexedSequence<U>
    where
        F: FnMut(&T, usize, &Self) -> U,
    {
        let len = self.len();
        let mut out: Slots<U> = SmallVec::with_capacity(len);
        for index in 0..len {
            out.push(self.get(index).map(|value| transform(&value, index, self)));
        }
        IndexedSequence::from_raw(out)
    }

    /// Like [`map`](Self::map), but a [`Spread::Sequence`] result is spliced
    /// in one level deep. Holes, in the receiver or in spliced sequences, are
    /// dropped.
    pub fn flat_map<U, F>(&self, mut transform: F) -> IndexedSequence<U>
    where
        F: FnMut(&T, usize, &Self) -> Spread<U>,
    {
        let mut out = Slots::new();
        self.scan(|value, index| {
            match transform(&value, index, self) {
                Spread::Element(item) => out.push(Some(item)),
                Spread::Sequence(items) => {
                    out.extend(items.into_slots().into_iter().flatten().map(Some))
                }
            }
            ControlFlow::<()>::Continue(())
        });
        IndexedSequence::from_raw(out)
    }

    /// Left fold seeded with the first present element.
    ///
    /// # Errors
    /// [`SequenceError::EmptySequenceReduce`] if no element is present.
    pub fn reduce<F>(&self, mut combine: F) -> Result<T>
    where
        F: FnMut(T, T, usize, &Self) -> T,
    {
        let mut acc = None;
        self.scan(|value, index| {
            acc = Some(match acc.take() {
                None => value,
                Some(prev) => combine(prev, value, index, self),
            });
            ControlFlow::<()>::Continue(())
        });
        acc.ok_or(SequenceError::EmptySequenceReduce)
    }

    /// Right fold seeded with the last present element.
    ///
    /// # Errors
    /// [`SequenceError::EmptySequenceReduce`] if no element is present.
    pub fn reduce_right<F>(&self, mut combine: F) -> Result<T>
    where
        F: FnMut(T, T, usize, &Self) -> T,
    {
        let mut acc = None;
        self.scan_rev(|value, index| {
            acc = Some(match acc.take() {
                None => value,
                Some(prev) => combine(prev, value, index, self),
            });
            ControlFlow::<()>::Continue(())
        });
        acc.ok_or(SequenceError::EmptySequenceReduce)
    }

    /// Left fold starting from `init`.
    pub fn reduce_with<U, F>(&self, init: U, mut combine: F) -> U
    where
        F: FnMut(U, T, usize, &Self) -> U,
    {
        let len = self.len();
        let mut acc = init;
        for index in 0..len {
            if let Some(value) = self.get(index) {
                acc = combine(acc, value, index, self);
            }
        }
        acc
    }

    /// Right fold starting from `init`.
    pub fn reduce_right_with<U, F>(&self, init: U, mut combine: F) -> U
    where
        F: FnMut(U, T, usize, &Self) -> U,
    {
        let len = self.len();
        let mut acc = init;
        for index in (0..len).rev() {
            if let Some(value) = self.get(index) {
                acc = combine(acc, value, index, self);
            }
        }
        acc
    }
}

impl<T: Clone> IndexedSequence<IndexedSequence<T>> {
    /// Splices every inner sequence into one, dropping holes at both levels.
    pub fn flat(&self) -> IndexedSequence<T> {
        self.flat_map(|inner, _, _| Spread::Sequence(inner.clone()))
    }
}

impl<T: fmt::Display> IndexedSequence<T> {
    pub(crate) fn write_joined(&self, out: &mut impl fmt::Write, separator: &str) -> fmt::Result {
        let slots = self.slots.borrow();
        for (index, slot) in slots.iter().enumerate() {
            if index > 0 {
                out.write_str(separator)?;
            }
            if let Some(value) = slot {
                write!(out, "{value}")?;
            }
        }
        Ok(())
    }

    /// Joins the elements' textual forms with `separator`. Holes render as
    /// empty strings.
    ///
    /// # Examples
    /// ```
    /// use arrayish_core::IndexedSequence;
    ///
    /// let seq = IndexedSequence::of([1, 2, 3]);
    /// assert_eq!(seq.join(" - "), "1 - 2 - 3");
    /// ```
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_joined(&mut out, separator);
        out
    }

    /// Same as `to_string()`; locale-aware formatting is not supported.
    pub fn to_locale_string(&self) -> String {
        self.join(",")
    }
}
