//! Suite configuration.

use strum::IntoEnumIterator;

use crate::element::ElementWidth;
use crate::harness::{CycleBencher, DEFAULT_RUNS};
use crate::kernels::KernelKind;

/// Input sizes of the default suite.
pub const DEFAULT_SIZES: [usize; 5] = [5000, 20_000, 312_500, 6_000_000, 25_000_000];

/// What to benchmark and how often.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Input lengths, one table row each.
    pub sizes: Vec<usize>,
    /// Timed runs per measurement.
    pub runs: usize,
    /// Untimed runs before each measurement.
    pub warmup_runs: usize,
    /// Kernels, one table each.
    pub kernels: Vec<KernelKind>,
    pub widths: Vec<ElementWidth>,
    /// Worker threads for the parallel kernels. `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            runs: DEFAULT_RUNS,
            warmup_runs: 0,
            kernels: KernelKind::iter().collect(),
            widths: ElementWidth::iter().collect(),
            threads: None,
        }
    }
}

impl BenchConfig {
    #[must_use]
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    #[must_use]
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    #[must_use]
    pub fn with_warmup_runs(mut self, warmup_runs: usize) -> Self {
        self.warmup_runs = warmup_runs;
        self
    }

    #[must_use]
    pub fn with_kernels(mut self, kernels: impl Into<Vec<KernelKind>>) -> Self {
        self.kernels = kernels.into();
        self
    }

    #[must_use]
    pub fn with_widths(mut self, widths: impl Into<Vec<ElementWidth>>) -> Self {
        self.widths = widths.into();
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn validate(&self) {
        assert!(!self.sizes.is_empty(), "at least one input size is required");
        assert!(!self.kernels.is_empty(), "at least one kernel is required");
        assert!(!self.widths.is_empty(), "at least one element width is required");
        assert!(self.runs > 0, "runs must be > 0, got {}", self.runs);
        if let Some(threads) = self.threads {
            assert!(threads > 0, "threads must be > 0, got {}", threads);
        }
    }

    pub fn bencher(&self) -> CycleBencher {
        CycleBencher::new()
            .with_runs(self.runs)
            .with_warmup_runs(self.warmup_runs)
    }
}
