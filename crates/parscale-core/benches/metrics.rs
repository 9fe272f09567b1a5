//! Criterion benchmarks for the scaling metrics.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use parscale_core::metrics::{efficiency, overhead_factor, speedup, throughput};
use parscale_core::series::{RunSeries, Sample};

fn synthetic(len: u32, serial_fraction: f64) -> RunSeries {
    let samples = (1..=len)
        .map(|p| Sample::new(p, serial_fraction + (1.0 - serial_fraction) / f64::from(p)))
        .collect();
    RunSeries::new(samples).unwrap()
}

fn bench_metrics(c: &mut Criterion) {
    let lens: Vec<u32> = vec![17, 256, 4096];

    let mut group = c.benchmark_group("single_series");
    for &len in &lens {
        let series = synthetic(len, 0.05);
        group.bench_with_input(BenchmarkId::new("speedup", len), &series, |b, s| {
            b.iter(|| speedup(s).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("efficiency", len), &series, |b, s| {
            b.iter(|| efficiency(s).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("throughput", len), &series, |b, s| {
            b.iter(|| throughput(s, 100.0).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("series_pair");
    for &len in &lens {
        let pair = (synthetic(len, 0.05), synthetic(len, 0.2));
        group.bench_with_input(BenchmarkId::new("overhead_factor", len), &pair, |b, (x, y)| {
            b.iter(|| overhead_factor(x, y).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_metrics);
criterion_main!(benches);
