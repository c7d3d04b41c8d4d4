use bitsort::prelude::*;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M u64");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60)); // Large per-iteration setup cost

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;
    let random_ints: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    group.throughput(Throughput::Bytes((count * size_of::<u64>()) as u64));

    // Bitsort
    group.bench_function("bitsort (in-place)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| sort_slice(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_1m_i32(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M i32");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(60));

    let mut rng = rand::rng();
    let count = 1_000_000;
    let random_ints: Vec<i32> = (0..count).map(|_| rng.random()).collect();

    group.throughput(Throughput::Bytes((count * size_of::<i32>()) as u64));

    group.bench_function("bitsort (in-place)", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| sort_slice(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_ints.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_u64, bench_1m_i32);
criterion_main!(benches);
