use bitsort::prelude::*;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

fn bench_u32(c: &mut Criterion) {
    let mut group = c.benchmark_group("u32 Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;
    let random_ints: Vec<u32> = (0..count).map(|_| rng.random()).collect();

    // Bitsort
    group.bench_function("bitsort (in-place)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| sort_slice(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_small_key_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("u32 Sort, 10-bit keys");
    group.sample_size(10);

    // Narrow keys let the declared maximum cut the number of bit levels.
    let mut rng = rand::rng();
    let count = 10_000;
    let random_ints: Vec<u32> = (0..count).map(|_| rng.random_range(0..1024)).collect();

    group.bench_function("bitsort (max_key = 1023)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| sort(black_box(&mut data), 1023),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("bitsort (max_key = u32::MAX)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| sort(black_box(&mut data), u32::MAX as u64),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_f32(c: &mut Criterion) {
    let mut group = c.benchmark_group("f32 Sort");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;
    let random_floats: Vec<f32> = (0..count)
        .map(|_| (rng.random::<f32>() - 0.5) * 2.0e20)
        .collect();

    group.bench_function("bitsort (in-place)", |b| {
        b.iter_batched(
            || random_floats.clone(),
            |mut data| sort_slice(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable_by (total_cmp)", |b| {
        b.iter_batched(
            || random_floats.clone(),
            |mut data| data.sort_unstable_by(f32::total_cmp),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_u32, bench_small_key_range, bench_f32);
criterion_main!(benches);
