//! # Slotsort
//!
//! `slotsort` sorts contiguous buffers of fixed-width elements: unsigned bytes
//! (`u8`) and signed words (`i16`). It offers three algorithms, each in two
//! access modes:
//!
//! - **Insertion sort**: stable, and fastest when no element is far from its
//!   final position.
//! - **Quicksort**: for data that is entirely unsorted. Median-of-three
//!   pivots, recursion bounded to `log2(n)`, small partitions finished by one
//!   insertion sort pass.
//! - **Shellsort**: a solid all-round choice when the data may or may not be
//!   nearly in order.
//!
//! **Direct** functions reorder the buffer in place. **Index** functions
//! (`_idx`) never touch the buffer; they fill a caller-provided index array
//! with the permutation that sorts it, so related arrays stay correlated with
//! the buffer.
//!
//! Every function sorts an inclusive range `[from, to]` ([`SortRange`]) and
//! leaves everything outside it alone. Word sorts use signed order by default
//! and accept a comparator in their `_by` form. No sort allocates.
//!
//! ## Usage
//!
//! ```rust
//! use slotsort::prelude::*;
//!
//! let mut rolls = [5u8, 3, 3, 1, 4];
//! quick_sort_bytes(&mut rolls, 0..=4);
//! assert_eq!(rolls, [1, 3, 3, 4, 5]);
//!
//! let scores = [12i16, -4, 30];
//! let mut index = [0usize; 3];
//! shell_sort_words_idx_by(&scores, &mut index, 0..=2, |a, b| a > b);
//! assert_eq!(index, [2, 0, 1]);
//! assert_eq!(scores, [12, -4, 30]);
//! ```
//!
//! ## Comparators
//!
//! A comparator `is_less(a, b)` returns `true` iff `a` must come before `b`.
//! It must be a strict weak ordering; in particular `is_less(a, a)` must be
//! `false`. Breaking that contract leaves the order unspecified, but never
//! causes out-of-bounds access, and index sorts still produce a permutation.
//!
//! ## Tuning
//!
//! The quicksort cutover (default 10) and the shellsort gap multiplier
//! (default 3) are build-time constants; see [`Tuning`] and [`Sorter`].
//!
//! ## Features
//!
//! `quicksort`, `shellsort`, `direct`, `index`, `bytes` and `words` select
//! which variants are compiled. All are enabled by default. Insertion sort is
//! always available.

mod algo;
pub mod core;
pub mod error;
#[cfg(feature = "index")]
pub mod permutation;
pub mod sorter;
pub mod tuning;

pub use crate::core::SortRange;
pub use error::{RangeError, TuningError};
#[cfg(feature = "index")]
pub use permutation::{apply_index, is_permutation};
pub use sorter::*;
pub use tuning::{DEFAULT_QUICKSORT_LIMIT, DEFAULT_SHELLSORT_CONST, DefaultTuning, Tuning, validate};

pub mod prelude {
    pub use crate::core::SortRange;
    #[cfg(feature = "index")]
    pub use crate::permutation::{apply_index, is_permutation};
    pub use crate::sorter::*;
    pub use crate::tuning::{DefaultTuning, Tuning};
}
