//! Throughput benchmarks for the three MurmurHash3 variants

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use murmur3::{compute_hash128, compute_hash32, compute_hash64, State128};
use std::hint::black_box;

/// One-shot throughput across input sizes
fn benchmark_hash_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_throughput");

    // 16B, 1KB, 64KB, 1MB
    let sizes = [16, 1024, 65536, 1_048_576];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));

        let data: Vec<u8> = (0..*size).map(|i| (i % 251) as u8).collect();

        group.bench_with_input(BenchmarkId::new("murmur3_32", size), &data, |b, data| {
            b.iter(|| black_box(compute_hash32(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("murmur3_64", size), &data, |b, data| {
            b.iter(|| black_box(compute_hash64(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("murmur3_128", size), &data, |b, data| {
            b.iter(|| black_box(compute_hash128(black_box(data))));
        });
    }
    group.finish();
}

/// Cost of the carry buffer when input arrives in small, unaligned chunks
fn benchmark_incremental_chunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_128");

    let data = vec![0xA5u8; 65536];
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk in [7usize, 64, 4096] {
        group.bench_with_input(BenchmarkId::new("chunk", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut state = State128::new();
                for piece in data.chunks(chunk) {
                    state.update(piece);
                }
                black_box(state.finalize())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_hash_variants,
    benchmark_incremental_chunks
);
criterion_main!(benches);
