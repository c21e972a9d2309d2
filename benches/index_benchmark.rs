use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use slotsort::prelude::*;
use std::hint::black_box;

fn bench_index_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("Index Sort 100K Words");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 100_000;
    let words: Vec<i16> = (0..count).map(|_| rng.random()).collect();
    let range = SortRange::full(count);
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("quick_sort_words_idx", |b| {
        b.iter_batched(
            || vec![0usize; count],
            |mut index| quick_sort_words_idx(black_box(&words), &mut index, range),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("shell_sort_words_idx", |b| {
        b.iter_batched(
            || vec![0usize; count],
            |mut index| shell_sort_words_idx(black_box(&words), &mut index, range),
            BatchSize::LargeInput,
        )
    });

    // What std needs to produce the same index.
    group.bench_function("slice::sort_unstable_by_key (index)", |b| {
        b.iter_batched(
            || (0..count).collect::<Vec<usize>>(),
            |mut index| index.sort_unstable_by_key(|&i| black_box(&words)[i]),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_nearly_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("Index Sort Nearly Sorted");
    group.sample_size(10);

    // Every element within a few slots of its place.
    let mut rng = rand::rng();
    let count = 10_000;
    let words: Vec<i16> = (0..count)
        .map(|i| (i as i16).wrapping_add(rng.random_range(-4..=4)))
        .collect();
    let range = SortRange::full(count);

    group.bench_function("insertion_sort_words_idx", |b| {
        b.iter_batched(
            || vec![0usize; count],
            |mut index| insertion_sort_words_idx(black_box(&words), &mut index, range),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("quick_sort_words_idx", |b| {
        b.iter_batched(
            || vec![0usize; count],
            |mut index| quick_sort_words_idx(black_box(&words), &mut index, range),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("shell_sort_words_idx", |b| {
        b.iter_batched(
            || vec![0usize; count],
            |mut index| shell_sort_words_idx(black_box(&words), &mut index, range),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_index_words, bench_nearly_sorted);
criterion_main!(benches);
