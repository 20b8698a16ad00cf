//! Integer summation kernels.
//!
//! Every kernel maps a slice to its wrapping sum and every kernel returns the
//! same value for the same input. They differ only in how the loop is issued:
//!
//! | Kernel | Strategy |
//! |--------|----------|
//! | [`KernelKind::SingleScalar`] | indexed loop, one accumulator |
//! | [`KernelKind::IterFold`] | iterator fold |
//! | [`KernelKind::Unroll2Scalar`] | unrolled by 2 |
//! | [`KernelKind::Unroll4Scalar`] | unrolled by 4 |
//! | [`KernelKind::Simd128`] | SSSE3 / NEON lanes + horizontal reduce |
//! | [`KernelKind::Simd256`] | AVX2 / paired NEON lanes + horizontal reduce |
//! | [`KernelKind::ParallelScalar`] | rayon partitions, scalar per partition |
//! | [`KernelKind::ParallelSimd128`] | rayon partitions, 128-bit per partition |
//! | [`KernelKind::ParallelSimd256`] | rayon partitions, 256-bit per partition |
//!
//! Lengths that are not a multiple of the unroll or lane count are finished
//! with a scalar tail loop. SIMD kernels fall back to [`scalar::single`] when
//! the CPU does not support the instruction set.

pub mod parallel;
pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub(crate) mod avx2;

#[cfg(target_arch = "x86_64")]
pub(crate) mod sse;

#[cfg(target_arch = "aarch64")]
pub(crate) mod neon;

#[cfg(feature = "bench")]
pub mod bench;

use strum_macros::{Display, EnumIter};

use crate::element::SumElement;

/// Signature shared by all kernels.
pub type KernelFn<T> = fn(&[T]) -> T;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum KernelKind {
    SingleScalar,
    IterFold,
    Unroll2Scalar,
    Unroll4Scalar,
    Simd128,
    Simd256,
    ParallelScalar,
    ParallelSimd128,
    ParallelSimd256,
}

impl KernelKind {
    /// Kernel function for element type `T`.
    pub fn func<T: SumElement>(self) -> KernelFn<T> {
        match self {
            KernelKind::SingleScalar => scalar::single::<T>,
            KernelKind::IterFold => scalar::iter_fold::<T>,
            KernelKind::Unroll2Scalar => scalar::unroll2::<T>,
            KernelKind::Unroll4Scalar => scalar::unroll4::<T>,
            KernelKind::Simd128 => simd128::<T>,
            KernelKind::Simd256 => simd256::<T>,
            KernelKind::ParallelScalar => parallel::sum_scalar::<T>,
            KernelKind::ParallelSimd128 => parallel::sum_simd128::<T>,
            KernelKind::ParallelSimd256 => parallel::sum_simd256::<T>,
        }
    }

    #[inline]
    pub fn sum<T: SumElement>(self, values: &[T]) -> T {
        (self.func::<T>())(values)
    }

    pub fn is_parallel(self) -> bool {
        matches!(
            self,
            KernelKind::ParallelScalar | KernelKind::ParallelSimd128 | KernelKind::ParallelSimd256
        )
    }
}

/// Sum in 128-bit lanes when available.
#[inline]
pub fn simd128<T: SumElement>(values: &[T]) -> T {
    T::simd128_sum(values)
}

/// Sum in 256-bit lanes when available.
#[inline]
pub fn simd256<T: SumElement>(values: &[T]) -> T {
    T::simd256_sum(values)
}

#[cfg(test)]
mod tests;
