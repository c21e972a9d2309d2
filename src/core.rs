//! Core types for slotsort.
//!
//! This module defines:
//! - [`SortRange`]: the inclusive `[from, to]` span a sort operates on.
//! - SortView: internal access layer that lets one engine drive both direct
//!   and index-based sorts.

use crate::error::RangeError;
use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive span `[from, to]` of buffer positions.
///
/// `from > to` is the empty range. Sorting an empty range does nothing, and
/// neither does sorting a single element in place.
///
/// # Examples
///
/// ```
/// use slotsort::SortRange;
///
/// let range = <SortRange as From<_>>::from(1..=4);
/// assert_eq!(range.len(), 4);
///
/// assert!(SortRange::new(2, 1).is_empty());
/// assert_eq!(SortRange::full(3), SortRange::new(0, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SortRange {
    from: usize,
    to: usize,
}

impl SortRange {
    /// Creates the range `[from, to]`.
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// The range covering a whole slice of `len` elements.
    pub const fn full(len: usize) -> Self {
        if len == 0 {
            Self { from: 1, to: 0 }
        } else {
            Self { from: 0, to: len - 1 }
        }
    }

    /// First position of the range.
    pub const fn from(&self) -> usize {
        self.from
    }

    /// Last position of the range (inclusive).
    pub const fn to(&self) -> usize {
        self.to
    }

    /// Returns `true` if the range holds no positions.
    pub const fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// Number of positions in the range.
    pub const fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.to - self.from).saturating_add(1)
        }
    }

    /// Checks that every position of the range is valid for a slice of `len`
    /// elements. Empty ranges always pass.
    ///
    /// ```
    /// use slotsort::{RangeError, SortRange};
    ///
    /// assert!(SortRange::new(0, 4).check(5).is_ok());
    /// assert_eq!(
    ///     SortRange::new(0, 5).check(5),
    ///     Err(RangeError::OutOfBounds { to: 5, len: 5 })
    /// );
    /// ```
    pub const fn check(self, len: usize) -> Result<Self, RangeError> {
        if !self.is_empty() && self.to >= len {
            return Err(RangeError::OutOfBounds { to: self.to, len });
        }
        Ok(self)
    }

    /// Slice bounds for the range, or `None` when it is empty.
    #[inline]
    pub(crate) fn bounds(&self) -> Option<RangeInclusive<usize>> {
        (!self.is_empty()).then_some(self.from..=self.to)
    }
}

impl From<RangeInclusive<usize>> for SortRange {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<(usize, usize)> for SortRange {
    fn from((from, to): (usize, usize)) -> Self {
        Self::new(from, to)
    }
}

impl fmt::Display for SortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

/// Position-addressed access to the slots an engine reorders.
///
/// A slot is the thing that moves (an element in direct mode, a buffer
/// position in index mode); an element is the value compared. Engines only
/// ever move slots with `swap` and `set_slot` of slots they read, so index
/// mode keeps its permutation whatever the comparator does.
pub(crate) trait SortView {
    type Elem: Copy;
    type Slot: Copy;

    fn len(&self) -> usize;

    fn slot(&self, pos: usize) -> Self::Slot;

    fn set_slot(&mut self, pos: usize, slot: Self::Slot);

    fn swap(&mut self, a: usize, b: usize);

    /// The element a slot stands for.
    fn elem(&self, slot: Self::Slot) -> Self::Elem;

    #[inline(always)]
    fn elem_at(&self, pos: usize) -> Self::Elem {
        self.elem(self.slot(pos))
    }
}

/// Sorts the elements themselves.
#[cfg(feature = "direct")]
pub(crate) struct Direct<'a, T> {
    data: &'a mut [T],
}

#[cfg(feature = "direct")]
impl<'a, T: Copy> Direct<'a, T> {
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }
}

#[cfg(feature = "direct")]
impl<T: Copy> SortView for Direct<'_, T> {
    type Elem = T;
    type Slot = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    fn slot(&self, pos: usize) -> T {
        self.data[pos]
    }

    #[inline(always)]
    fn set_slot(&mut self, pos: usize, slot: T) {
        self.data[pos] = slot;
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }

    #[inline(always)]
    fn elem(&self, slot: T) -> T {
        slot
    }
}

/// Sorts a window of an index array, reading elements through it.
///
/// `slots` is the `[from, to]` window of the caller's index array; the
/// positions stored in it are absolute positions into `data`.
#[cfg(feature = "index")]
pub(crate) struct Indexed<'a, T> {
    data: &'a [T],
    slots: &'a mut [usize],
}

#[cfg(feature = "index")]
impl<'a, T: Copy> Indexed<'a, T> {
    /// Writes the identity permutation for `range` into `index` and wraps
    /// that window. Returns `None` for an empty range.
    pub(crate) fn identity(data: &'a [T], index: &'a mut [usize], range: SortRange) -> Option<Self> {
        let bounds = range.bounds()?;
        // Reject a short buffer before anything is written to the index.
        assert!(
            range.to() < data.len(),
            "range end {} out of bounds for slice of length {}",
            range.to(),
            data.len()
        );
        let slots = &mut index[bounds.clone()];
        slots
            .iter_mut()
            .zip(bounds)
            .for_each(|(slot, pos)| *slot = pos);
        Some(Self { data, slots })
    }
}

#[cfg(feature = "index")]
impl<T: Copy> SortView for Indexed<'_, T> {
    type Elem = T;
    type Slot = usize;

    #[inline(always)]
    fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    fn slot(&self, pos: usize) -> usize {
        self.slots[pos]
    }

    #[inline(always)]
    fn set_slot(&mut self, pos: usize, slot: usize) {
        self.slots[pos] = slot;
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }

    #[inline(always)]
    fn elem(&self, slot: usize) -> T {
        self.data[slot]
    }
}
