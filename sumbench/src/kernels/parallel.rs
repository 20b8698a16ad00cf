//! Multi-threaded kernels: partition, sum each range locally, reduce.

use common::parallel::map_partitions;

use super::{KernelFn, scalar, simd128, simd256};
use crate::element::SumElement;

/// Sum `values` split into `parts` contiguous ranges, each summed with
/// `inner` on a rayon worker. Partial sums are reduced after all workers
/// have joined.
pub fn partitioned<T: SumElement>(values: &[T], parts: usize, inner: KernelFn<T>) -> T {
    map_partitions(values.len(), parts, |range| inner(&values[range]))
        .iter()
        .fold(T::zero(), |acc, partial| acc.wrapping_add(partial))
}

/// One partition per thread of the current rayon pool.
#[inline]
fn worker_parts() -> usize {
    rayon::current_num_threads()
}

pub fn sum_scalar<T: SumElement>(values: &[T]) -> T {
    partitioned(values, worker_parts(), scalar::single::<T>)
}

pub fn sum_simd128<T: SumElement>(values: &[T]) -> T {
    partitioned(values, worker_parts(), simd128::<T>)
}

pub fn sum_simd256<T: SumElement>(values: &[T]) -> T {
    partitioned(values, worker_parts(), simd256::<T>)
}
