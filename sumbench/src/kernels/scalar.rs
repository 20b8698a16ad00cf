//! Scalar (non-SIMD) summation kernels.

use crate::element::SumElement;

/// Indexed loop with a single accumulator.
#[inline]
#[allow(clippy::needless_range_loop)]
pub fn single<T: SumElement>(values: &[T]) -> T {
    let mut total = T::zero();
    for i in 0..values.len() {
        total = total.wrapping_add(&values[i]);
    }
    total
}

/// Iterator fold, no index range.
#[inline]
pub fn iter_fold<T: SumElement>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, v| acc.wrapping_add(v))
}

/// Loop unrolled by 2 into a single accumulator.
#[inline]
pub fn unroll2<T: SumElement>(values: &[T]) -> T {
    let chunks = values.chunks_exact(2);
    let remainder = chunks.remainder();

    let mut total = T::zero();
    for pair in chunks {
        total = total.wrapping_add(&pair[0]);
        total = total.wrapping_add(&pair[1]);
    }

    remainder.iter().fold(total, |acc, v| acc.wrapping_add(v))
}

/// Loop unrolled by 4 into a single accumulator.
#[inline]
pub fn unroll4<T: SumElement>(values: &[T]) -> T {
    let chunks = values.chunks_exact(4);
    let remainder = chunks.remainder();

    let mut total = T::zero();
    for quad in chunks {
        total = total.wrapping_add(&quad[0]);
        total = total.wrapping_add(&quad[1]);
        total = total.wrapping_add(&quad[2]);
        total = total.wrapping_add(&quad[3]);
    }

    remainder.iter().fold(total, |acc, v| acc.wrapping_add(v))
}
