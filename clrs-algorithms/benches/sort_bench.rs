/*
 * Copyright (c) Microsoft Corporation.
 * Licensed under the MIT license.
 */
use std::{hint::black_box, time::Duration};

use clrs_algorithms::{
    bubble_sort, insertion_sort, merge_sort, randn_with, recursive_insertion_sort,
    selection_sort,
};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

type Sorter = fn(&mut [f64]);

const SORTERS: [(&str, Sorter); 5] = [
    ("insertion", insertion_sort),
    ("recursive_insertion", recursive_insertion_sort),
    ("selection", selection_sort),
    ("bubble", bubble_sort),
    ("merge", merge_sort),
];

fn get_random_content(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed); // Constant seed of a random number.
    randn_with(&mut rng, 0.0, 1.0, len).unwrap()
}

fn benchmark_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for len in [16, 256, 1024] {
        let data = get_random_content(len as u64, len);
        for (name, sort) in SORTERS {
            group.bench_with_input(BenchmarkId::new(name, len), &data, |b, data| {
                b.iter_batched_ref(
                    || data.clone(),
                    |arr| sort(black_box(arr)),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3));
    targets = benchmark_sorts,
);
criterion_main!(benches);
