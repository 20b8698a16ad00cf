//! Tick sources for the measurement harness.
//!
//! On x86_64 the time-stamp counter is used; elsewhere a monotonic
//! nanosecond clock stands in for it.

use std::time::Instant;

/// Monotonic tick counter.
pub trait CycleCounter {
    fn name(&self) -> &'static str;

    /// Current tick value. Only differences between two reads are meaningful.
    fn read(&self) -> u64;
}

/// x86_64 time-stamp counter (`rdtsc`).
#[cfg(target_arch = "x86_64")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Tsc;

#[cfg(target_arch = "x86_64")]
impl CycleCounter for Tsc {
    fn name(&self) -> &'static str {
        "rdtsc"
    }

    #[inline(always)]
    fn read(&self) -> u64 {
        // SAFETY: rdtsc is available on every x86_64 CPU.
        unsafe { std::arch::x86_64::_rdtsc() }
    }
}

/// Nanoseconds elapsed since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleCounter for MonotonicClock {
    fn name(&self) -> &'static str {
        "monotonic-ns"
    }

    #[inline]
    fn read(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Best tick source for this platform.
pub fn default_counter() -> Box<dyn CycleCounter + Send + Sync> {
    #[cfg(target_arch = "x86_64")]
    {
        Box::new(Tsc)
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        Box::new(MonotonicClock::new())
    }
}
