//! Integer summation microbenchmark.
//!
//! Compares scalar, unrolled, iterator, SIMD and multi-threaded summation of
//! `u32`/`u64` arrays. Each kernel is timed with a cycle counter over many
//! runs and the minimum is reported together with an effective clock
//! estimate and the resulting adds per cycle.
//!
//! ```rust,ignore
//! use sumbench::{BenchConfig, cycles, run_suite};
//!
//! let config = BenchConfig::default().with_sizes([5000]);
//! let counter = cycles::default_counter();
//! run_suite(&config, &*counter, std::io::stdout())?;
//! ```

pub mod config;
pub mod cycles;
pub mod element;
mod error;
pub mod harness;
pub mod kernels;
pub mod report;
pub mod suite;

pub use config::{BenchConfig, DEFAULT_SIZES};
pub use element::{ElementWidth, SumElement};
pub use error::{Error, Result};
pub use harness::{CycleBencher, DEFAULT_RUNS, Measurement};
pub use kernels::{KernelFn, KernelKind};
pub use report::{BenchRow, ReportWriter};
pub use suite::{bench_one, run_suite, sequential_input};
