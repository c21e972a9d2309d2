#![allow(dead_code)]

use slotsort::prelude::*;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub type ByteSort = fn(&mut [u8], SortRange);
pub type WordSort = fn(&mut [i16], SortRange);
pub type WordSortBy = fn(&mut [i16], SortRange, fn(&i16, &i16) -> bool);
pub type ByteIndexSort = fn(&[u8], &mut [usize], SortRange);
pub type WordIndexSort = fn(&[i16], &mut [usize], SortRange);
pub type WordIndexSortBy = fn(&[i16], &mut [usize], SortRange, fn(&i16, &i16) -> bool);

pub fn byte_sorts() -> [(&'static str, ByteSort); 3] {
    [
        ("insertion", |b: &mut [u8], r: SortRange| insertion_sort_bytes(b, r)),
        ("quick", |b: &mut [u8], r: SortRange| quick_sort_bytes(b, r)),
        ("shell", |b: &mut [u8], r: SortRange| shell_sort_bytes(b, r)),
    ]
}

pub fn word_sorts() -> [(&'static str, WordSort); 3] {
    [
        ("insertion", |b: &mut [i16], r: SortRange| insertion_sort_words(b, r)),
        ("quick", |b: &mut [i16], r: SortRange| quick_sort_words(b, r)),
        ("shell", |b: &mut [i16], r: SortRange| shell_sort_words(b, r)),
    ]
}

pub fn word_sorts_by() -> [(&'static str, WordSortBy); 3] {
    [
        ("insertion", |b: &mut [i16], r: SortRange, f: fn(&i16, &i16) -> bool| {
            insertion_sort_words_by(b, r, f)
        }),
        ("quick", |b: &mut [i16], r: SortRange, f: fn(&i16, &i16) -> bool| {
            quick_sort_words_by(b, r, f)
        }),
        ("shell", |b: &mut [i16], r: SortRange, f: fn(&i16, &i16) -> bool| {
            shell_sort_words_by(b, r, f)
        }),
    ]
}

pub fn byte_index_sorts() -> [(&'static str, ByteIndexSort); 3] {
    [
        ("insertion", |b: &[u8], i: &mut [usize], r: SortRange| insertion_sort_bytes_idx(b, i, r)),
        ("quick", |b: &[u8], i: &mut [usize], r: SortRange| quick_sort_bytes_idx(b, i, r)),
        ("shell", |b: &[u8], i: &mut [usize], r: SortRange| shell_sort_bytes_idx(b, i, r)),
    ]
}

pub fn word_index_sorts() -> [(&'static str, WordIndexSort); 3] {
    [
        ("insertion", |b: &[i16], i: &mut [usize], r: SortRange| insertion_sort_words_idx(b, i, r)),
        ("quick", |b: &[i16], i: &mut [usize], r: SortRange| quick_sort_words_idx(b, i, r)),
        ("shell", |b: &[i16], i: &mut [usize], r: SortRange| shell_sort_words_idx(b, i, r)),
    ]
}

pub fn word_index_sorts_by() -> [(&'static str, WordIndexSortBy); 3] {
    [
        (
            "insertion",
            |b: &[i16], i: &mut [usize], r: SortRange, f: fn(&i16, &i16) -> bool| {
                insertion_sort_words_idx_by(b, i, r, f)
            },
        ),
        (
            "quick",
            |b: &[i16], i: &mut [usize], r: SortRange, f: fn(&i16, &i16) -> bool| {
                quick_sort_words_idx_by(b, i, r, f)
            },
        ),
        (
            "shell",
            |b: &[i16], i: &mut [usize], r: SortRange, f: fn(&i16, &i16) -> bool| {
                shell_sort_words_idx_by(b, i, r, f)
            },
        ),
    ]
}

pub fn descending(a: &i16, b: &i16) -> bool {
    a > b
}

pub fn unsigned(a: &i16, b: &i16) -> bool {
    (*a as u16) < (*b as u16)
}

/// Orders by the high byte only, so words sharing it tie.
pub fn high_byte(a: &i16, b: &i16) -> bool {
    (*a >> 8) < (*b >> 8)
}

/// Values of `buf` in the order given by `index[from..=to]`.
pub fn gather<T: Copy>(buf: &[T], index: &[usize], range: SortRange) -> Vec<T> {
    if range.is_empty() {
        return Vec::new();
    }
    index[range.from()..=range.to()]
        .iter()
        .map(|&pos| buf[pos])
        .collect()
}
