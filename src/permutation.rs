//! Helpers for working with index sort results.

use crate::core::SortRange;

/// Returns `true` if `index[from..=to]` holds every position of `range`
/// exactly once.
///
/// An empty range is trivially a permutation. A range past the end of
/// `index` is not.
///
/// ```
/// use slotsort::is_permutation;
///
/// assert!(is_permutation(&[9, 3, 1, 2], 1..=3));
/// assert!(!is_permutation(&[9, 3, 3, 2], 1..=3));
/// ```
pub fn is_permutation(index: &[usize], range: impl Into<SortRange>) -> bool {
    let range = range.into();
    let Some(bounds) = range.bounds() else {
        return true;
    };
    let Some(slots) = index.get(bounds) else {
        return false;
    };

    let mut seen = vec![false; slots.len()];
    slots.iter().all(|&pos| {
        match pos.checked_sub(range.from()).and_then(|offset| seen.get_mut(offset)) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    })
}

/// Reorders `data[from..=to]` into the order described by an index sort
/// result, so that `data[k]` becomes the old `data[index[k]]`.
///
/// This carries arrays that run parallel to a sorted buffer (owners of
/// values, labels) into sorted order after the fact. `index` is left as it
/// is; the walk runs on a copy of its window.
///
/// # Panics
///
/// Panics if `index[from..=to]` is not a permutation of `[from, to]`, or if
/// the range does not fit `data` or `index`.
///
/// # Examples
///
/// ```
/// use slotsort::{apply_index, shell_sort_bytes_idx};
///
/// let ages = [31u8, 24, 57];
/// let mut names = ["ann", "ben", "cat"];
/// let mut index = [0usize; 3];
///
/// shell_sort_bytes_idx(&ages, &mut index, 0..=2);
/// apply_index(&mut names, &index, 0..=2);
///
/// assert_eq!(names, ["ben", "ann", "cat"]);
/// ```
pub fn apply_index<T>(data: &mut [T], index: &[usize], range: impl Into<SortRange>) {
    let range = range.into();
    let Some(bounds) = range.bounds() else {
        return;
    };
    assert!(
        is_permutation(index, range),
        "index {} is not a permutation",
        range
    );

    let base = range.from();
    let data = &mut data[bounds.clone()];
    let mut pending: Vec<usize> = index[bounds].iter().map(|&pos| pos - base).collect();

    // Walk each cycle once, marking placed slots with their own position.
    for i in 0..data.len() {
        let mut current = i;
        while pending[current] != i {
            let next = pending[current];
            data.swap(current, next);
            pending[current] = current;
            current = next;
        }
        pending[current] = current;
    }
}
