//! Index-range partitioning for fan-out/fan-in work on rayon.

use std::ops::Range;

use rayon::prelude::*;

/// Split `0..len` into at most `parts` contiguous ranges.
///
/// Every range but the last holds `len / parts` elements; the last one
/// extends to `len` and absorbs the remainder. Empty ranges are dropped, so
/// `len == 0` yields no ranges and `len < parts` yields a single range.
///
/// # Panics
///
/// Panics if `parts` is 0.
pub fn partition_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    assert!(parts > 0, "parts must be > 0");

    if len == 0 {
        return Vec::new();
    }

    let chunk = len / parts;
    if chunk == 0 {
        return vec![0..len];
    }

    (0..parts)
        .map(|i| {
            let start = i * chunk;
            let end = if i + 1 == parts { len } else { start + chunk };
            start..end
        })
        .collect()
}

/// Run `f` on each partition of `0..len` in parallel and collect the partial
/// results in partition order.
///
/// Workers share nothing mutable; the caller reduces the returned partials
/// after every worker has joined.
pub fn map_partitions<R, F>(len: usize, parts: usize, f: F) -> Vec<R>
where
    R: Send,
    F: Fn(Range<usize>) -> R + Sync + Send,
{
    partition_ranges(len, parts)
        .into_par_iter()
        .map(f)
        .collect()
}
