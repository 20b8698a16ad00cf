use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while running the benchmark suite.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Memory allocation failed for size {size} ({bytes} bytes)")]
    Allocation {
        size: usize,
        bytes: usize,
        source: TryReserveError,
    },

    #[error("Failed to build worker thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
