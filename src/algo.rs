//! Sorting engines: insertion sort, quicksort and shellsort.
//!
//! Every engine is written once against [`SortView`] and a strict weak
//! ordering `is_less`, then instantiated for byte and word elements in direct
//! and index mode by [`Sorter`](crate::Sorter).
//!
//! - **Insertion sort**: stable, used alone and as quicksort's finishing pass.
//! - **Quicksort**: median-of-three pivot, Hoare-style partition, recursion on
//!   the smaller side only. Partitions of at most `QUICKSORT_LIMIT` elements
//!   are left for one trailing insertion sort over the whole range.
//! - **Shellsort**: gaps `h = c * h + 1`, one interleaved insertion sort per
//!   residue class.

use crate::core::SortView;
#[cfg(any(feature = "quicksort", feature = "shellsort"))]
use crate::tuning::{Tuning, Validated};

/// Stable insertion sort over the whole view.
pub(crate) fn insertion_sort<V, F>(v: &mut V, is_less: &mut F)
where
    V: SortView,
    F: FnMut(&V::Elem, &V::Elem) -> bool,
{
    for i in 1..v.len() {
        insert_gapped(v, i, 1, is_less);
    }
}

/// Moves the slot at `i` left in steps of `gap` past every element it must
/// precede.
///
/// One comparison per element passed; equal elements are never passed, which
/// keeps gap-1 insertion stable.
#[inline(always)]
fn insert_gapped<V, F>(v: &mut V, i: usize, gap: usize, is_less: &mut F)
where
    V: SortView,
    F: FnMut(&V::Elem, &V::Elem) -> bool,
{
    let held = v.slot(i);
    let key = v.elem(held);

    let mut j = i;
    while j >= gap && is_less(&key, &v.elem_at(j - gap)) {
        let prev = v.slot(j - gap);
        v.set_slot(j, prev);
        j -= gap;
    }

    if j != i {
        v.set_slot(j, held);
    }
}

/// Quicksort with insertion sort finishing.
#[cfg(feature = "quicksort")]
pub(crate) fn quick_sort<P, V, F>(v: &mut V, is_less: &mut F)
where
    P: Tuning,
    V: SortView,
    F: FnMut(&V::Elem, &V::Elem) -> bool,
{
    quick_sort_depth::<P, V, F>(v, is_less);
}

/// Quicksort returning the deepest recursion level it reached (0 when it
/// never recursed).
#[cfg(feature = "quicksort")]
fn quick_sort_depth<P, V, F>(v: &mut V, is_less: &mut F) -> u32
where
    P: Tuning,
    V: SortView,
    F: FnMut(&V::Elem, &V::Elem) -> bool,
{
    let limit = Validated::<P>::QUICKSORT_LIMIT;
    let len = v.len();

    let depth = if len > limit {
        partition_loop(v, 0, len - 1, limit, 0, is_less)
    } else {
        0
    };

    // With a limit of 1 every partition left behind is a single element.
    if limit > 1 {
        insertion_sort(v, is_less);
    }

    depth
}

/// Partitions `[lo, hi]` until every remaining sub-range has at most `limit`
/// elements.
///
/// Only the smaller side is recursed into; the larger side is handled by the
/// next loop iteration. The smaller side has at most half the elements of the
/// current range, so depth stays below `log2(len)`.
#[cfg(feature = "quicksort")]
fn partition_loop<V, F>(
    v: &mut V,
    mut lo: usize,
    mut hi: usize,
    limit: usize,
    depth: u32,
    is_less: &mut F,
) -> u32
where
    V: SortView,
    F: FnMut(&V::Elem, &V::Elem) -> bool,
{
    let mut max_depth = depth;

    loop {
        let mid = lo + (hi - lo) / 2;
        place_median(v, lo, mid, hi, is_less);
        let split = partition(v, lo, hi, is_less);

        let left = split - lo;
        let right = hi - split;

        if left > right {
            if right > limit {
                let d = partition_loop(v, split + 1, hi, limit, depth + 1, is_less);
                max_depth = max_depth.max(d);
            }
            if left > limit {
                hi = split - 1;
            } else {
                break;
            }
        } else {
            if left > limit {
                let d = partition_loop(v, lo, split - 1, limit, depth + 1, is_less);
                max_depth = max_depth.max(d);
            }
            if right > limit {
                lo = split + 1;
            } else {
                break;
            }
        }
    }

    max_depth
}

/// Swaps the median of the elements at `lo`, `mid` and `hi` into `lo`.
///
/// The middle element wins ties with the first, and the first wins ties with
/// the last, so equal values never cause a swap they do not need.
#[cfg(feature = "quicksort")]
#[inline]
fn place_median<V, F>(v: &mut V, lo: usize, mid: usize, hi: usize, is_less: &mut F)
where
    V: SortView,
    F: FnMut(&V::Elem, &V::Elem) -> bool,
{
    let first = v.elem_at(lo);
    let middle = v.elem_at(mid);
    let last = v.elem_at(hi);

    if is_between(&first, &middle, &last, is_less) {
        v.swap(lo, mid);
    } else if is_between(&first, &last, &middle, is_less) {
        v.swap(lo, hi);
    }
}

/// `a <= m <= b || b <= m <= a`.
#[cfg(feature = "quicksort")]
#[inline(always)]
fn is_between<T, F>(a: &T, m: &T, b: &T, is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (!is_less(m, a) && !is_less(b, m)) || (!is_less(m, b) && !is_less(a, m))
}

/// Partitions `[lo, hi]` around the pivot at `lo` (`hi > lo`).
///
/// Afterwards everything left of the returned position is `<= pivot`, the
/// pivot sits at the returned position and everything right of it is
/// `> pivot`.
#[cfg(feature = "quicksort")]
fn partition<V, F>(v: &mut V, lo: usize, hi: usize, is_less: &mut F) -> usize
where
    V: SortView,
    F: FnMut(&V::Elem, &V::Elem) -> bool,
{
    let pivot = v.elem_at(lo);
    let mut i = lo + 1;
    let mut j = hi;

    while i <= j {
        if is_less(&pivot, &v.elem_at(i)) {
            while j > i && is_less(&pivot, &v.elem_at(j)) {
                j -= 1;
            }
            if j == i {
                break;
            }
            v.swap(i, j);
        }
        i += 1;
    }

    let split = i - 1;
    v.swap(lo, split);
    split
}

/// Shellsort.
#[cfg(feature = "shellsort")]
pub(crate) fn shell_sort<P, V, F>(v: &mut V, is_less: &mut F)
where
    P: Tuning,
    V: SortView,
    F: FnMut(&V::Elem, &V::Elem) -> bool,
{
    let len = v.len();

    for gap in Gaps::new(len, Validated::<P>::SHELLSORT_CONST) {
        for residue in 0..gap {
            let mut i = residue + gap;
            while i < len {
                insert_gapped(v, i, gap, is_less);
                i += gap;
            }
        }
    }
}

/// Decreasing shellsort gaps for a range of `len` elements, ending with 1.
///
/// Starts from the first term of `1, c + 1, c * (c + 1) + 1, ...` that is not
/// below `len` and walks the sequence back down, skipping that first term.
#[cfg(feature = "shellsort")]
#[derive(Clone, Debug)]
pub(crate) struct Gaps {
    gap: usize,
    factor: usize,
}

#[cfg(feature = "shellsort")]
impl Gaps {
    pub(crate) fn new(len: usize, factor: usize) -> Self {
        let mut gap = 1usize;
        while gap < len {
            match gap.checked_mul(factor).and_then(|g| g.checked_add(1)) {
                Some(next) => gap = next,
                None => break,
            }
        }
        Self { gap, factor }
    }
}

#[cfg(feature = "shellsort")]
impl Iterator for Gaps {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.gap <= 1 {
            self.gap = 0;
            return None;
        }
        self.gap = (self.gap - 1) / self.factor;
        (self.gap > 0).then_some(self.gap)
    }
}
