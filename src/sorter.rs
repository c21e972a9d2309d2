//! Public entry points.
//!
//! Every combination of algorithm (insertion, quick, shell), access mode
//! (direct, `_idx`) and element width (`_bytes`, `_words`, `_words_by`) is an
//! associated function of [`Sorter`], and a free function at the crate root
//! that uses [`DefaultTuning`].
//!
//! Direct functions reorder `buf[from..=to]` in place. Index functions leave
//! `buf` untouched, write the identity permutation into `index[from..=to]`
//! and sort that instead, so that afterwards `index[k]` is the position in
//! `buf` of the element with sorted rank `k`.
//!
//! # Panics
//!
//! All functions panic if a non-empty range ends at or past the end of `buf`
//! (or of `index`). Use [`SortRange::check`] to validate first.

use crate::algo;
#[cfg(feature = "direct")]
use crate::core::Direct;
#[cfg(feature = "index")]
use crate::core::Indexed;
use crate::core::SortRange;
use crate::tuning::{DefaultTuning, Tuning};
use log::trace;
use std::marker::PhantomData;

/// Sort entry points for one build-time [`Tuning`].
///
/// ```
/// use slotsort::{DefaultTuning, Sorter};
///
/// let mut words = [300i16, -2, 7];
/// Sorter::<DefaultTuning>::quick_sort_words(&mut words, 0..=2);
/// assert_eq!(words, [-2, 7, 300]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Sorter<P: Tuning = DefaultTuning>(PhantomData<P>);

#[cfg(feature = "bytes")]
#[inline(always)]
fn byte_lt(a: &u8, b: &u8) -> bool {
    a < b
}

#[cfg(feature = "words")]
#[inline(always)]
fn word_lt(a: &i16, b: &i16) -> bool {
    a < b
}

#[cfg(feature = "direct")]
#[inline]
fn direct<T: Copy>(buf: &mut [T], range: SortRange, sort: impl FnOnce(&mut Direct<'_, T>)) {
    if let Some(bounds) = range.bounds() {
        sort(&mut Direct::new(&mut buf[bounds]));
    }
}

#[cfg(feature = "index")]
#[inline]
fn indexed<T: Copy>(
    buf: &[T],
    index: &mut [usize],
    range: SortRange,
    sort: impl FnOnce(&mut Indexed<'_, T>),
) {
    if let Some(mut view) = Indexed::identity(buf, index, range) {
        sort(&mut view);
    }
}

impl<P: Tuning> Sorter<P> {
    // Insertion sort.

    /// Stable insertion sort of `buf[from..=to]`, unsigned byte order.
    ///
    /// Fast when no element is far from its final position, and the only
    /// stable algorithm here.
    #[cfg(all(feature = "direct", feature = "bytes"))]
    pub fn insertion_sort_bytes(buf: &mut [u8], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("insertion_sort_bytes {} of {}", range, buf.len());
        direct(buf, range, |v| algo::insertion_sort(v, &mut byte_lt));
    }

    /// Stable insertion sort of `buf[from..=to]`, signed word order.
    #[cfg(all(feature = "direct", feature = "words"))]
    pub fn insertion_sort_words(buf: &mut [i16], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("insertion_sort_words {} of {}", range, buf.len());
        direct(buf, range, |v| algo::insertion_sort(v, &mut word_lt));
    }

    /// Stable insertion sort of `buf[from..=to]` by `is_less`.
    ///
    /// `is_less(a, b)` must return `true` iff `a` belongs before `b`, and
    /// must be a strict weak ordering. It is called exactly once per pair of
    /// held and shifted element.
    #[cfg(all(feature = "direct", feature = "words"))]
    pub fn insertion_sort_words_by<F>(buf: &mut [i16], range: impl Into<SortRange>, mut is_less: F)
    where
        F: FnMut(&i16, &i16) -> bool,
    {
        let range = range.into();
        trace!("insertion_sort_words_by {} of {}", range, buf.len());
        direct(buf, range, |v| algo::insertion_sort(v, &mut is_less));
    }

    /// Stable index sort of `buf[from..=to]`, unsigned byte order.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotsort::insertion_sort_bytes_idx;
    ///
    /// let rolls = [5u8, 3, 3, 1, 4];
    /// let mut index = [0usize; 5];
    /// insertion_sort_bytes_idx(&rolls, &mut index, 0..=4);
    ///
    /// // The two 3s keep their order.
    /// assert_eq!(index, [3, 1, 2, 4, 0]);
    /// ```
    #[cfg(all(feature = "index", feature = "bytes"))]
    pub fn insertion_sort_bytes_idx(buf: &[u8], index: &mut [usize], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("insertion_sort_bytes_idx {} of {}", range, buf.len());
        indexed(buf, index, range, |v| algo::insertion_sort(v, &mut byte_lt));
    }

    /// Stable index sort of `buf[from..=to]`, signed word order.
    #[cfg(all(feature = "index", feature = "words"))]
    pub fn insertion_sort_words_idx(buf: &[i16], index: &mut [usize], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("insertion_sort_words_idx {} of {}", range, buf.len());
        indexed(buf, index, range, |v| algo::insertion_sort(v, &mut word_lt));
    }

    /// Stable index sort of `buf[from..=to]` by `is_less`.
    #[cfg(all(feature = "index", feature = "words"))]
    pub fn insertion_sort_words_idx_by<F>(
        buf: &[i16],
        index: &mut [usize],
        range: impl Into<SortRange>,
        mut is_less: F,
    ) where
        F: FnMut(&i16, &i16) -> bool,
    {
        let range = range.into();
        trace!("insertion_sort_words_idx_by {} of {}", range, buf.len());
        indexed(buf, index, range, |v| algo::insertion_sort(v, &mut is_less));
    }

    // Quicksort.

    /// Quicksort of `buf[from..=to]`, unsigned byte order.
    ///
    /// The pivot is the median of the first, middle and last element.
    /// Partitions of at most `P::QUICKSORT_LIMIT` elements are finished by a
    /// single insertion sort pass. Recursion depth is at most `log2(len)`.
    /// Not stable.
    ///
    /// # Arguments
    ///
    /// * `buf` - The buffer to sort in place.
    /// * `range` - The inclusive `[from, to]` span to sort; positions outside
    ///   it are not touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotsort::quick_sort_bytes;
    ///
    /// let mut data = [5u8, 3, 3, 1, 4];
    /// quick_sort_bytes(&mut data, 0..=4);
    /// assert_eq!(data, [1, 3, 3, 4, 5]);
    /// ```
    #[cfg(all(feature = "quicksort", feature = "direct", feature = "bytes"))]
    pub fn quick_sort_bytes(buf: &mut [u8], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("quick_sort_bytes {} of {}", range, buf.len());
        direct(buf, range, |v| algo::quick_sort::<P, _, _>(v, &mut byte_lt));
    }

    /// Quicksort of `buf[from..=to]`, signed word order.
    #[cfg(all(feature = "quicksort", feature = "direct", feature = "words"))]
    pub fn quick_sort_words(buf: &mut [i16], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("quick_sort_words {} of {}", range, buf.len());
        direct(buf, range, |v| algo::quick_sort::<P, _, _>(v, &mut word_lt));
    }

    /// Quicksort of `buf[from..=to]` by `is_less`.
    ///
    /// ```
    /// use slotsort::quick_sort_words_by;
    ///
    /// let mut data = [1i16, 2, 3];
    /// quick_sort_words_by(&mut data, 0..=2, |a, b| a > b);
    /// assert_eq!(data, [3, 2, 1]);
    /// ```
    #[cfg(all(feature = "quicksort", feature = "direct", feature = "words"))]
    pub fn quick_sort_words_by<F>(buf: &mut [i16], range: impl Into<SortRange>, mut is_less: F)
    where
        F: FnMut(&i16, &i16) -> bool,
    {
        let range = range.into();
        trace!("quick_sort_words_by {} of {}", range, buf.len());
        direct(buf, range, |v| algo::quick_sort::<P, _, _>(v, &mut is_less));
    }

    /// Quicksort index sort of `buf[from..=to]`, unsigned byte order.
    #[cfg(all(feature = "quicksort", feature = "index", feature = "bytes"))]
    pub fn quick_sort_bytes_idx(buf: &[u8], index: &mut [usize], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("quick_sort_bytes_idx {} of {}", range, buf.len());
        indexed(buf, index, range, |v| algo::quick_sort::<P, _, _>(v, &mut byte_lt));
    }

    /// Quicksort index sort of `buf[from..=to]`, signed word order.
    #[cfg(all(feature = "quicksort", feature = "index", feature = "words"))]
    pub fn quick_sort_words_idx(buf: &[i16], index: &mut [usize], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("quick_sort_words_idx {} of {}", range, buf.len());
        indexed(buf, index, range, |v| algo::quick_sort::<P, _, _>(v, &mut word_lt));
    }

    /// Quicksort index sort of `buf[from..=to]` by `is_less`.
    ///
    /// `buf` is only read, which keeps other arrays indexed like `buf`
    /// (owners, labels) valid after the sort.
    ///
    /// ```
    /// use slotsort::quick_sort_words_idx_by;
    ///
    /// let salaries = [3200i16, 4100, 2800];
    /// let names = ["ada", "bo", "cy"];
    /// let mut index = [0usize; 3];
    /// quick_sort_words_idx_by(&salaries, &mut index, 0..=2, |a, b| a > b);
    ///
    /// let ranked: Vec<&str> = index.iter().map(|&i| names[i]).collect();
    /// assert_eq!(ranked, ["bo", "ada", "cy"]);
    /// ```
    #[cfg(all(feature = "quicksort", feature = "index", feature = "words"))]
    pub fn quick_sort_words_idx_by<F>(
        buf: &[i16],
        index: &mut [usize],
        range: impl Into<SortRange>,
        mut is_less: F,
    ) where
        F: FnMut(&i16, &i16) -> bool,
    {
        let range = range.into();
        trace!("quick_sort_words_idx_by {} of {}", range, buf.len());
        indexed(buf, index, range, |v| algo::quick_sort::<P, _, _>(v, &mut is_less));
    }

    // Shellsort.

    /// Shellsort of `buf[from..=to]`, unsigned byte order.
    ///
    /// A good default when the data may or may not be nearly sorted. Gaps
    /// follow `h = P::SHELLSORT_CONST * h + 1`. Not stable.
    #[cfg(all(feature = "shellsort", feature = "direct", feature = "bytes"))]
    pub fn shell_sort_bytes(buf: &mut [u8], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("shell_sort_bytes {} of {}", range, buf.len());
        direct(buf, range, |v| algo::shell_sort::<P, _, _>(v, &mut byte_lt));
    }

    /// Shellsort of `buf[from..=to]`, signed word order.
    #[cfg(all(feature = "shellsort", feature = "direct", feature = "words"))]
    pub fn shell_sort_words(buf: &mut [i16], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("shell_sort_words {} of {}", range, buf.len());
        direct(buf, range, |v| algo::shell_sort::<P, _, _>(v, &mut word_lt));
    }

    /// Shellsort of `buf[from..=to]` by `is_less`.
    #[cfg(all(feature = "shellsort", feature = "direct", feature = "words"))]
    pub fn shell_sort_words_by<F>(buf: &mut [i16], range: impl Into<SortRange>, mut is_less: F)
    where
        F: FnMut(&i16, &i16) -> bool,
    {
        let range = range.into();
        trace!("shell_sort_words_by {} of {}", range, buf.len());
        direct(buf, range, |v| algo::shell_sort::<P, _, _>(v, &mut is_less));
    }

    /// Shellsort index sort of `buf[from..=to]`, unsigned byte order.
    #[cfg(all(feature = "shellsort", feature = "index", feature = "bytes"))]
    pub fn shell_sort_bytes_idx(buf: &[u8], index: &mut [usize], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("shell_sort_bytes_idx {} of {}", range, buf.len());
        indexed(buf, index, range, |v| algo::shell_sort::<P, _, _>(v, &mut byte_lt));
    }

    /// Shellsort index sort of `buf[from..=to]`, signed word order.
    #[cfg(all(feature = "shellsort", feature = "index", feature = "words"))]
    pub fn shell_sort_words_idx(buf: &[i16], index: &mut [usize], range: impl Into<SortRange>) {
        let range = range.into();
        trace!("shell_sort_words_idx {} of {}", range, buf.len());
        indexed(buf, index, range, |v| algo::shell_sort::<P, _, _>(v, &mut word_lt));
    }

    /// Shellsort index sort of `buf[from..=to]` by `is_less`.
    #[cfg(all(feature = "shellsort", feature = "index", feature = "words"))]
    pub fn shell_sort_words_idx_by<F>(
        buf: &[i16],
        index: &mut [usize],
        range: impl Into<SortRange>,
        mut is_less: F,
    ) where
        F: FnMut(&i16, &i16) -> bool,
    {
        let range = range.into();
        trace!("shell_sort_words_idx_by {} of {}", range, buf.len());
        indexed(buf, index, range, |v| algo::shell_sort::<P, _, _>(v, &mut is_less));
    }
}

// Shorthands for `Sorter<DefaultTuning>`.

/// [`Sorter::insertion_sort_bytes`] with [`DefaultTuning`].
#[cfg(all(feature = "direct", feature = "bytes"))]
#[inline]
pub fn insertion_sort_bytes(buf: &mut [u8], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::insertion_sort_bytes(buf, range)
}

/// [`Sorter::insertion_sort_words`] with [`DefaultTuning`].
#[cfg(all(feature = "direct", feature = "words"))]
#[inline]
pub fn insertion_sort_words(buf: &mut [i16], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::insertion_sort_words(buf, range)
}

/// [`Sorter::insertion_sort_words_by`] with [`DefaultTuning`].
#[cfg(all(feature = "direct", feature = "words"))]
#[inline]
pub fn insertion_sort_words_by<F>(buf: &mut [i16], range: impl Into<SortRange>, is_less: F)
where
    F: FnMut(&i16, &i16) -> bool,
{
    Sorter::<DefaultTuning>::insertion_sort_words_by(buf, range, is_less)
}

/// [`Sorter::insertion_sort_bytes_idx`] with [`DefaultTuning`].
#[cfg(all(feature = "index", feature = "bytes"))]
#[inline]
pub fn insertion_sort_bytes_idx(buf: &[u8], index: &mut [usize], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::insertion_sort_bytes_idx(buf, index, range)
}

/// [`Sorter::insertion_sort_words_idx`] with [`DefaultTuning`].
#[cfg(all(feature = "index", feature = "words"))]
#[inline]
pub fn insertion_sort_words_idx(buf: &[i16], index: &mut [usize], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::insertion_sort_words_idx(buf, index, range)
}

/// [`Sorter::insertion_sort_words_idx_by`] with [`DefaultTuning`].
#[cfg(all(feature = "index", feature = "words"))]
#[inline]
pub fn insertion_sort_words_idx_by<F>(
    buf: &[i16],
    index: &mut [usize],
    range: impl Into<SortRange>,
    is_less: F,
) where
    F: FnMut(&i16, &i16) -> bool,
{
    Sorter::<DefaultTuning>::insertion_sort_words_idx_by(buf, index, range, is_less)
}

/// [`Sorter::quick_sort_bytes`] with [`DefaultTuning`].
#[cfg(all(feature = "quicksort", feature = "direct", feature = "bytes"))]
#[inline]
pub fn quick_sort_bytes(buf: &mut [u8], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::quick_sort_bytes(buf, range)
}

/// [`Sorter::quick_sort_words`] with [`DefaultTuning`].
#[cfg(all(feature = "quicksort", feature = "direct", feature = "words"))]
#[inline]
pub fn quick_sort_words(buf: &mut [i16], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::quick_sort_words(buf, range)
}

/// [`Sorter::quick_sort_words_by`] with [`DefaultTuning`].
#[cfg(all(feature = "quicksort", feature = "direct", feature = "words"))]
#[inline]
pub fn quick_sort_words_by<F>(buf: &mut [i16], range: impl Into<SortRange>, is_less: F)
where
    F: FnMut(&i16, &i16) -> bool,
{
    Sorter::<DefaultTuning>::quick_sort_words_by(buf, range, is_less)
}

/// [`Sorter::quick_sort_bytes_idx`] with [`DefaultTuning`].
#[cfg(all(feature = "quicksort", feature = "index", feature = "bytes"))]
#[inline]
pub fn quick_sort_bytes_idx(buf: &[u8], index: &mut [usize], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::quick_sort_bytes_idx(buf, index, range)
}

/// [`Sorter::quick_sort_words_idx`] with [`DefaultTuning`].
#[cfg(all(feature = "quicksort", feature = "index", feature = "words"))]
#[inline]
pub fn quick_sort_words_idx(buf: &[i16], index: &mut [usize], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::quick_sort_words_idx(buf, index, range)
}

/// [`Sorter::quick_sort_words_idx_by`] with [`DefaultTuning`].
#[cfg(all(feature = "quicksort", feature = "index", feature = "words"))]
#[inline]
pub fn quick_sort_words_idx_by<F>(
    buf: &[i16],
    index: &mut [usize],
    range: impl Into<SortRange>,
    is_less: F,
) where
    F: FnMut(&i16, &i16) -> bool,
{
    Sorter::<DefaultTuning>::quick_sort_words_idx_by(buf, index, range, is_less)
}

/// [`Sorter::shell_sort_bytes`] with [`DefaultTuning`].
#[cfg(all(feature = "shellsort", feature = "direct", feature = "bytes"))]
#[inline]
pub fn shell_sort_bytes(buf: &mut [u8], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::shell_sort_bytes(buf, range)
}

/// [`Sorter::shell_sort_words`] with [`DefaultTuning`].
#[cfg(all(feature = "shellsort", feature = "direct", feature = "words"))]
#[inline]
pub fn shell_sort_words(buf: &mut [i16], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::shell_sort_words(buf, range)
}

/// [`Sorter::shell_sort_words_by`] with [`DefaultTuning`].
#[cfg(all(feature = "shellsort", feature = "direct", feature = "words"))]
#[inline]
pub fn shell_sort_words_by<F>(buf: &mut [i16], range: impl Into<SortRange>, is_less: F)
where
    F: FnMut(&i16, &i16) -> bool,
{
    Sorter::<DefaultTuning>::shell_sort_words_by(buf, range, is_less)
}

/// [`Sorter::shell_sort_bytes_idx`] with [`DefaultTuning`].
#[cfg(all(feature = "shellsort", feature = "index", feature = "bytes"))]
#[inline]
pub fn shell_sort_bytes_idx(buf: &[u8], index: &mut [usize], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::shell_sort_bytes_idx(buf, index, range)
}

/// [`Sorter::shell_sort_words_idx`] with [`DefaultTuning`].
#[cfg(all(feature = "shellsort", feature = "index", feature = "words"))]
#[inline]
pub fn shell_sort_words_idx(buf: &[i16], index: &mut [usize], range: impl Into<SortRange>) {
    Sorter::<DefaultTuning>::shell_sort_words_idx(buf, index, range)
}

/// [`Sorter::shell_sort_words_idx_by`] with [`DefaultTuning`].
#[cfg(all(feature = "shellsort", feature = "index", feature = "words"))]
#[inline]
pub fn shell_sort_words_idx_by<F>(
    buf: &[i16],
    index: &mut [usize],
    range: impl Into<SortRange>,
    is_less: F,
) where
    F: FnMut(&i16, &i16) -> bool,
{
    Sorter::<DefaultTuning>::shell_sort_words_idx_by(buf, index, range, is_less)
}
