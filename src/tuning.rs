//! Build-time tuning constants.
//!
//! The defaults are good for random data. To change them, define a type
//! implementing [`Tuning`] once and sort through
//! [`Sorter<YourTuning>`](crate::Sorter):
//!
//! ```
//! use slotsort::{Sorter, Tuning};
//!
//! struct Coarse;
//!
//! impl Tuning for Coarse {
//!     const QUICKSORT_LIMIT: usize = 16;
//!     const SHELLSORT_CONST: usize = 2;
//! }
//!
//! type CoarseSorter = Sorter<Coarse>;
//!
//! let mut data = [9u8, 4, 7, 1];
//! CoarseSorter::shell_sort_bytes(&mut data, 0..=3);
//! assert_eq!(data, [1, 4, 7, 9]);
//! ```
//!
//! Both constants must be greater than zero. A zero constant fails the build
//! as soon as a sort using it is instantiated:
//!
//! ```compile_fail
//! use slotsort::{Sorter, Tuning};
//!
//! struct NoCutover;
//!
//! impl Tuning for NoCutover {
//!     const QUICKSORT_LIMIT: usize = 0;
//! }
//!
//! let mut data = [3u8, 1, 2];
//! Sorter::<NoCutover>::quick_sort_bytes(&mut data, 0..=2);
//! ```
//!
//! ```compile_fail
//! use slotsort::{Sorter, Tuning};
//!
//! struct FlatGaps;
//!
//! impl Tuning for FlatGaps {
//!     const SHELLSORT_CONST: usize = 0;
//! }
//!
//! let mut data = [3u8, 1, 2];
//! Sorter::<FlatGaps>::shell_sort_bytes(&mut data, 0..=2);
//! ```
//!
//! Values above about 20 are accepted but unlikely to be faster.

use crate::error::TuningError;
use std::marker::PhantomData;

/// Default small-partition threshold for quicksort.
pub const DEFAULT_QUICKSORT_LIMIT: usize = 10;

/// Default gap multiplier for shellsort.
pub const DEFAULT_SHELLSORT_CONST: usize = 3;

/// Compile-time tuning of the quicksort cutover and the shellsort gap sequence.
pub trait Tuning {
    /// Partitions of at most this many elements are left to the trailing
    /// insertion sort pass.
    const QUICKSORT_LIMIT: usize = DEFAULT_QUICKSORT_LIMIT;

    /// Multiplier `c` of the gap sequence `h = c * h + 1`.
    const SHELLSORT_CONST: usize = DEFAULT_SHELLSORT_CONST;
}

/// The default tuning: `QUICKSORT_LIMIT = 10`, `SHELLSORT_CONST = 3`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTuning;

impl Tuning for DefaultTuning {}

/// Checks a pair of tuning constants.
pub const fn validate(quicksort_limit: usize, shellsort_const: usize) -> Result<(), TuningError> {
    if quicksort_limit == 0 {
        return Err(TuningError::ZeroQuicksortLimit);
    }
    if shellsort_const == 0 {
        return Err(TuningError::ZeroShellsortConst);
    }
    Ok(())
}

/// Tuning constants as read by the engines, checked during const evaluation.
pub(crate) struct Validated<P>(PhantomData<P>);

impl<P: Tuning> Validated<P> {
    const CHECK: () = assert!(
        validate(P::QUICKSORT_LIMIT, P::SHELLSORT_CONST).is_ok(),
        "tuning constants must be greater than zero"
    );

    pub(crate) const QUICKSORT_LIMIT: usize = {
        let () = Self::CHECK;
        P::QUICKSORT_LIMIT
    };

    pub(crate) const SHELLSORT_CONST: usize = {
        let () = Self::CHECK;
        P::SHELLSORT_CONST
    };
}
