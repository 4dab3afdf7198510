//! Throughput benchmarks for both digest algorithms

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hashcalc_hashing::{compute_digest, HashAlgorithm};

/// Benchmark both algorithms across input sizes
fn benchmark_digest_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest_throughput");

    // 16B, 1KB, 64KB, 1MB
    let sizes = [16, 1024, 65536, 1_048_576];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));
        let input = "x".repeat(*size);

        for algorithm in HashAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &input,
                |b, input| {
                    b.iter(|| std::hint::black_box(compute_digest(input, algorithm)));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_digest_algorithms);
criterion_main!(benches);
