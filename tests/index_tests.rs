mod common;

use common::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotsort::prelude::*;

#[test]
fn test_index_sort_leaves_buffer_untouched() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let len = rng.random_range(0..300);
        let bytes: Vec<u8> = (0..len).map(|_| rng.random_range(0..16)).collect();
        let words: Vec<i16> = (0..len).map(|_| rng.random()).collect();
        let range = SortRange::full(len);

        let mut expected_bytes = bytes.clone();
        expected_bytes.sort();
        let mut expected_words = words.clone();
        expected_words.sort();

        for (name, sort) in byte_index_sorts() {
            let before = bytes.clone();
            let mut index = vec![usize::MAX; len];
            sort(&bytes, &mut index, range);

            assert_eq!(bytes, before, "{}", name);
            assert!(is_permutation(&index, range), "{}: {:?}", name, index);
            assert_eq!(gather(&bytes, &index, range), expected_bytes, "{}", name);
        }

        for (name, sort) in word_index_sorts() {
            let mut index = vec![usize::MAX; len];
            sort(&words, &mut index, range);

            assert!(is_permutation(&index, range), "{}", name);
            assert_eq!(gather(&words, &index, range), expected_words, "{}", name);
        }

        let mut expected_desc = words.clone();
        expected_desc.sort_by(|a, b| b.cmp(a));
        for (name, sort) in word_index_sorts_by() {
            let mut index = vec![usize::MAX; len];
            sort(&words, &mut index, range, descending);

            assert!(is_permutation(&index, range), "{}", name);
            assert_eq!(gather(&words, &index, range), expected_desc, "{}", name);
        }
    }
}

#[test]
fn test_index_sort_overwrites_stale_index() {
    let data = [4u8, 2, 9, 1];
    let mut index = [3usize, 3, 3, 3];

    for (name, sort) in byte_index_sorts() {
        sort(&data, &mut index, SortRange::new(0, 3));
        assert_eq!(index, [3, 1, 0, 2], "{}", name);
    }
}

#[test]
fn test_insertion_index_sort_is_stable() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let len = rng.random_range(0..200);
        let data: Vec<u8> = (0..len).map(|_| rng.random_range(0..5)).collect();
        let mut index = vec![0usize; len];
        insertion_sort_bytes_idx(&data, &mut index, SortRange::full(len));

        // Equal values must come out in ascending position order.
        for w in index.windows(2) {
            assert!(
                data[w[0]] < data[w[1]] || (data[w[0]] == data[w[1]] && w[0] < w[1]),
                "{:?}",
                index
            );
        }

        // Same check through a comparator that ties on the low byte.
        let words: Vec<i16> = (0..len).map(|_| rng.random()).collect();
        let mut index = vec![0usize; len];
        insertion_sort_words_idx_by(&words, &mut index, SortRange::full(len), high_byte);
        for w in index.windows(2) {
            let (a, b) = (words[w[0]] >> 8, words[w[1]] >> 8);
            assert!(a < b || (a == b && w[0] < w[1]));
        }
    }
}

#[test]
fn test_insertion_direct_sort_is_stable() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..100 {
        let len = rng.random_range(0..200);
        let input: Vec<i16> = (0..len).map(|_| rng.random()).collect();

        let mut expected = input.clone();
        expected.sort_by_key(|w| w >> 8);

        let mut data = input.clone();
        insertion_sort_words_by(&mut data, SortRange::full(len), high_byte);
        assert_eq!(data, expected);
    }
}

#[test]
fn test_direct_and_index_decisions_match() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        let len = rng.random_range(0..400);
        // Ties on the high byte with distinct low bytes expose any difference
        // in how equal elements were moved.
        let words: Vec<i16> = (0..len).map(|_| rng.random_range(-1024..1024)).collect();
        let range = SortRange::full(len);

        for ((name, direct), (_, index_sort)) in word_sorts_by().into_iter().zip(word_index_sorts_by()) {
            let mut data = words.clone();
            direct(&mut data, range, high_byte);

            let mut index = vec![0usize; len];
            index_sort(&words, &mut index, range, high_byte);

            assert_eq!(gather(&words, &index, range), data, "{}", name);
        }
    }
}

#[test]
fn test_parallel_arrays() {
    let salaries = [3100i16, 2500, 4800, 2500, 3900];
    let mut owners = ["ada", "bo", "cy", "di", "ed"];
    let mut index = [0usize; 5];

    insertion_sort_words_idx(&salaries, &mut index, 0..=4);
    assert_eq!(index, [1, 3, 0, 4, 2]);

    let ranked: Vec<(i16, &str)> = index.iter().map(|&i| (salaries[i], owners[i])).collect();
    assert_eq!(
        ranked,
        [(2500, "bo"), (2500, "di"), (3100, "ada"), (3900, "ed"), (4800, "cy")]
    );

    apply_index(&mut owners, &index, 0..=4);
    assert_eq!(owners, ["bo", "di", "ada", "ed", "cy"]);
}

#[test]
fn test_inconsistent_comparator_keeps_permutation() {
    let mut rng = StdRng::seed_from_u64(3);
    let words: Vec<i16> = (0..300).map(|_| rng.random()).collect();
    let range = SortRange::full(words.len());

    let mut index = vec![0usize; words.len()];
    quick_sort_words_idx_by(&words, &mut index, range, |_, _| true);
    assert!(is_permutation(&index, range));

    let mut index = vec![0usize; words.len()];
    shell_sort_words_idx_by(&words, &mut index, range, |_, _| true);
    assert!(is_permutation(&index, range));

    let mut coin = StdRng::seed_from_u64(5);
    let mut index = vec![0usize; words.len()];
    quick_sort_words_idx_by(&words, &mut index, range, |_, _| coin.random());
    assert!(is_permutation(&index, range));

    let mut index = vec![0usize; words.len()];
    insertion_sort_words_idx_by(&words, &mut index, range, |_, _| coin.random());
    assert!(is_permutation(&index, range));
}

#[test]
fn test_index_sort_with_offset_range() {
    // Table layout: slot 0 holds the entry count.
    let table = [5i16, 40, -10, 30, -10, 20];
    let mut index = [0usize; 6];

    quick_sort_words_idx(&table, &mut index, 1..=5);

    assert_eq!(index[0], 0);
    assert!(is_permutation(&index, 1..=5));
    assert_eq!(gather(&table, &index, SortRange::new(1, 5)), [-10, -10, 20, 30, 40]);
}
