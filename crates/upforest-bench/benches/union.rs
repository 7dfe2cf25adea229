//! Union throughput benchmarks on generated workloads and the worst-case chain.
#![allow(clippy::expect_used)]

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use upforest_bench::{SizeTier, build_forest, chain_unions, generate_unions};
use upforest_core::UnionFind;

fn bench_generated(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_generated");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
        ("XL", SizeTier::XLarge),
    ] {
        let config = tier.config(42);
        let pairs = generate_unions(&config);
        group.throughput(Throughput::Elements(pairs.len() as u64));

        group.bench_function(BenchmarkId::new("apply", name), |b| {
            b.iter_batched(
                || UnionFind::<(), ()>::new(config.universe).expect("allocates"),
                |mut uf| {
                    let merged = pairs
                        .iter()
                        .filter(|&&(x, y)| uf.union(x, y).is_ok())
                        .count();
                    (uf, merged)
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_chain");

    for n in [1 << 10, 1 << 14, 1 << 17] {
        let pairs = chain_unions(n);
        group.throughput(Throughput::Elements(pairs.len() as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| build_forest(n, &pairs).expect("builds"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generated, bench_chain);
criterion_main!(benches);
