//! Benchmarks for the bar sampling pipeline.
//!
//! The group assigner is a single O(n) pass with a scalar rebasing offset;
//! these benchmarks guard that linear scaling across input sizes.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tickbars_bench::{cumulative_measure, synthetic_ticks};
use tickbars_lib::prelude::*;
use tickbars_lib::assign_groups;

fn bench_assign_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_groups");

    for size in [10_000usize, 100_000, 1_000_000] {
        let ticks = synthetic_ticks(size);
        let cumulative = cumulative_measure(&ticks, BarType::Volume);
        // ~200 rows per bar on average.
        let threshold = cumulative.last().unwrap() / (size as f64 / 200.0);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &cumulative, |b, cum| {
            b.iter(|| assign_groups(black_box(cum), black_box(threshold)).unwrap());
        });
    }

    group.finish();
}

fn bench_full_sample(c: &mut Criterion) {
    let ticks = synthetic_ticks(100_000);
    let mut group = c.benchmark_group("sample_100k");

    for bar_type in BarType::all() {
        let cumulative = cumulative_measure(&ticks, *bar_type);
        let threshold = cumulative.last().unwrap() / 500.0;
        let sampler = BarSampler::new(*bar_type, Threshold::Fixed(threshold));

        group.bench_function(bar_type.as_str(), |b| {
            b.iter(|| sampler.sample(black_box(&ticks)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assign_groups, bench_full_sample);
criterion_main!(benches);
