use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parvec_buffer::{parallel_sum, NumericBuffer, ParallelSum};
use parvec_core::scalar_sequential;

/// Seeded uniform buffer
fn generate_buffer(size: usize, seed: u64) -> NumericBuffer<f64> {
    let mut buffer = NumericBuffer::new(size);
    buffer.fill_uniform(-10.0, 10.0, seed).unwrap();
    buffer
}

fn bench_sequential_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_sum");
    let sizes = [1_000, 100_000, 1_000_000];

    for size in sizes {
        let buffer = generate_buffer(size, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), &buffer, |b, buffer| {
            b.iter(|| black_box(buffer).sum().unwrap())
        });
    }

    group.finish();
}

fn bench_parallel_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_sum");
    let size = 1_000_000;
    let buffer = generate_buffer(size, 42);

    for workers in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("dedicated_pool", workers),
            &workers,
            |b, &workers| b.iter(|| parallel_sum(black_box(&buffer), workers).unwrap()),
        );
    }

    // Kernel on a sequential engine, same chunking, no threads
    let kernel = ParallelSum::new(scalar_sequential());
    for workers in [1, 4] {
        group.bench_with_input(
            BenchmarkId::new("sequential_engine", workers),
            &workers,
            |b, &workers| b.iter(|| kernel.sum(black_box(&buffer), workers).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sequential_baseline, bench_parallel_sum);
criterion_main!(benches);
