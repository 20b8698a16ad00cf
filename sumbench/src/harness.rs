//! Minimum-of-N cycle measurement.

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::cycles::CycleCounter;

/// Timed runs per measurement.
pub const DEFAULT_RUNS: usize = 100;

/// Repeats a closure and records the tick delta of every run.
///
/// The minimum delta is the headline number: it filters out runs that were
/// interrupted or descheduled.
#[derive(Debug, Clone, Copy)]
pub struct CycleBencher {
    runs: usize,
    warmup_runs: usize,
}

impl Default for CycleBencher {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            warmup_runs: 0,
        }
    }
}

impl CycleBencher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of timed runs.
    #[must_use]
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Set the number of untimed runs before measuring.
    #[must_use]
    pub fn with_warmup_runs(mut self, warmup_runs: usize) -> Self {
        self.warmup_runs = warmup_runs;
        self
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn warmup_runs(&self) -> usize {
        self.warmup_runs
    }

    /// Run `f` `warmup_runs + runs` times, timing the last `runs`.
    ///
    /// # Panics
    ///
    /// Panics if `runs` is 0.
    pub fn measure<C, F, R>(&self, counter: &C, mut f: F) -> Measurement
    where
        C: CycleCounter + ?Sized,
        F: FnMut() -> R,
    {
        assert!(self.runs > 0, "runs must be > 0");

        for _ in 0..self.warmup_runs {
            black_box(f());
        }

        let mut samples = Vec::with_capacity(self.runs);
        let mut elapsed = Duration::ZERO;
        for _ in 0..self.runs {
            let wall_start = Instant::now();
            let start = counter.read();
            black_box(f());
            let end = counter.read();
            elapsed += wall_start.elapsed();

            samples.push(end.saturating_sub(start));
        }

        Measurement::from_samples(samples, elapsed)
    }
}

/// Tick statistics of one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub runs: usize,
    pub min_cycles: u64,
    pub max_cycles: u64,
    pub median_cycles: u64,
    pub total_cycles: u64,
    /// Wall-clock time spent in the timed runs.
    pub elapsed: Duration,
}

impl Measurement {
    fn from_samples(mut samples: Vec<u64>, elapsed: Duration) -> Self {
        debug_assert!(!samples.is_empty());
        samples.sort_unstable();

        Self {
            runs: samples.len(),
            min_cycles: samples.first().copied().unwrap_or_default(),
            max_cycles: samples.last().copied().unwrap_or_default(),
            median_cycles: samples.get(samples.len() / 2).copied().unwrap_or_default(),
            total_cycles: samples.iter().fold(0u64, |acc, &s| acc.saturating_add(s)),
            elapsed,
        }
    }

    /// Effective tick rate: ticks per wall-clock second over all timed runs.
    pub fn clock_hz(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total_cycles as f64 / secs
        } else {
            0.0
        }
    }

    pub fn clock_ghz(&self) -> f64 {
        self.clock_hz() / 1e9
    }

    /// Elements processed per tick of the fastest run.
    /// A zero-tick minimum counts as one tick.
    pub fn adds_per_cycle(&self, size: usize) -> f64 {
        size as f64 / self.min_cycles.max(1) as f64
    }
}
