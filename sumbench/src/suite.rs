//! Measure-and-report loop over (width, kernel, size).

use std::hint::black_box;
use std::io::Write;

use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::cycles::CycleCounter;
use crate::element::{ElementWidth, SumElement};
use crate::error::{Error, Result};
use crate::harness::CycleBencher;
use crate::kernels::KernelKind;
use crate::report::{BenchRow, ReportWriter};

/// Allocate `0..size` as `T`, failing instead of aborting when memory is short.
pub fn sequential_input<T: SumElement>(size: usize) -> Result<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(size)
        .map_err(|source| Error::Allocation {
            size,
            bytes: size.saturating_mul(size_of::<T>()),
            source,
        })?;
    data.extend((0..size).map(T::from_index));
    Ok(data)
}

/// Benchmark one kernel on one freshly allocated input.
pub fn bench_one<T, C>(
    bencher: &CycleBencher,
    counter: &C,
    kernel: KernelKind,
    size: usize,
) -> Result<BenchRow>
where
    T: SumElement,
    C: CycleCounter + ?Sized,
{
    let input = sequential_input::<T>(size)?;
    let func = kernel.func::<T>();

    let measurement = bencher.measure(counter, || func(black_box(&input)));
    let result = func(&input);

    debug!(
        kernel = %kernel,
        width = %T::WIDTH,
        size,
        min = measurement.min_cycles,
        median = measurement.median_cycles,
        max = measurement.max_cycles,
        "measured"
    );

    Ok(BenchRow::new(size, result.into(), &measurement))
}

/// Run every configured table and write it to `out`.
///
/// Returns the writer so callers can inspect buffered output.
pub fn run_suite<W, C>(config: &BenchConfig, counter: &C, out: W) -> Result<W>
where
    W: Write + Send,
    C: CycleCounter + Sync + ?Sized,
{
    config.validate();

    info!(
        simd = %common::cpu_features::simd_level(),
        counter = counter.name(),
        runs = config.runs,
        "starting benchmark suite"
    );

    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            info!(threads, "using dedicated worker pool");
            pool.install(|| run_tables(config, counter, out))
        }
        None => {
            info!(threads = rayon::current_num_threads(), "using global worker pool");
            run_tables(config, counter, out)
        }
    }
}

fn run_tables<W, C>(config: &BenchConfig, counter: &C, out: W) -> Result<W>
where
    W: Write,
    C: CycleCounter + ?Sized,
{
    let bencher = config.bencher();
    let mut report = ReportWriter::new(out);

    for &width in &config.widths {
        match width {
            ElementWidth::U32 => run_width::<u32, _, _>(config, &bencher, counter, &mut report)?,
            ElementWidth::U64 => run_width::<u64, _, _>(config, &bencher, counter, &mut report)?,
        }
    }

    Ok(report.into_inner())
}

fn run_width<T, W, C>(
    config: &BenchConfig,
    bencher: &CycleBencher,
    counter: &C,
    report: &mut ReportWriter<W>,
) -> Result<()>
where
    T: SumElement,
    W: Write,
    C: CycleCounter + ?Sized,
{
    for &kernel in &config.kernels {
        info!(kernel = %kernel, width = %T::WIDTH, "benchmarking");
        report.begin_table(kernel, T::WIDTH)?;
        for &size in &config.sizes {
            let row = bench_one::<T, C>(bencher, counter, kernel, size)?;
            report.row(&row)?;
        }
        report.end_table()?;
    }
    Ok(())
}
