//! Benchmark module for summation kernels.
//! Run with: cargo bench -p sumbench --features bench --bench kernels

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput};
use strum::IntoEnumIterator;

use super::KernelKind;
use crate::element::SumElement;

const SIZES: [usize; 3] = [5000, 20_000, 312_500];

/// Register kernel benchmarks with Criterion.
pub fn benchmarks(c: &mut Criterion) {
    benchmark_width::<u32>(c);
    benchmark_width::<u64>(c);
}

fn benchmark_width<T: SumElement>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("sum_{}", T::WIDTH));

    for size in SIZES {
        let values: Vec<T> = (0..size).map(T::from_index).collect();
        group.throughput(Throughput::Elements(size as u64));

        for kernel in KernelKind::iter() {
            let func = kernel.func::<T>();
            group.bench_function(BenchmarkId::new(kernel.to_string(), size), |b| {
                b.iter(|| black_box(func(black_box(&values))))
            });
        }
    }

    group.finish();
}
