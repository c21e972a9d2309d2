//! Error types for range and tuning validation.
//!
//! The sort entry points themselves never return errors: a bad range is a
//! programmer error and panics through slice bounds checks. These types exist
//! for callers that want to validate up front.

use std::fmt;

/// A [`SortRange`](crate::SortRange) that does not fit the slice it is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The last position of the range lies past the end of the slice.
    OutOfBounds { to: usize, len: usize },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::OutOfBounds { to, len } => {
                write!(f, "range end {} out of bounds for slice of length {}", to, len)
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Tuning constants that would make the sorts loop forever or divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningError {
    /// `QUICKSORT_LIMIT` was zero.
    ZeroQuicksortLimit,

    /// `SHELLSORT_CONST` was zero.
    ZeroShellsortConst,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::ZeroQuicksortLimit => {
                write!(f, "quicksort limit must be greater than zero")
            }
            TuningError::ZeroShellsortConst => {
                write!(f, "shellsort constant must be greater than zero")
            }
        }
    }
}

impl std::error::Error for TuningError {}
