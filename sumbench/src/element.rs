//! Unsigned element types the kernels operate on.

use std::fmt::{Debug, Display};

use num_traits::{WrappingAdd, Zero};
use strum_macros::{Display, EnumIter};

use crate::kernels::scalar;

/// Integer width of the benchmarked arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ElementWidth {
    #[strum(to_string = "u32")]
    U32,
    #[strum(to_string = "u64")]
    U64,
}

impl ElementWidth {
    pub fn bytes(self) -> usize {
        match self {
            ElementWidth::U32 => size_of::<u32>(),
            ElementWidth::U64 => size_of::<u64>(),
        }
    }
}

/// Element of a summation input.
///
/// Addition wraps at the element width. The vector entry points accumulate
/// in 128-bit or 256-bit lanes, reduce horizontally and finish the tail with
/// a scalar loop; they fall back to the scalar loop when the CPU lacks the
/// required instruction set.
pub trait SumElement:
    Copy + Debug + Display + PartialEq + Send + Sync + WrappingAdd + Zero + Into<u64> + 'static
{
    const WIDTH: ElementWidth;

    /// Truncate `value` to this width.
    fn from_u128_wrapping(value: u128) -> Self;

    #[inline]
    fn from_index(index: usize) -> Self {
        Self::from_u128_wrapping(index as u128)
    }

    fn simd128_sum(values: &[Self]) -> Self;

    fn simd256_sum(values: &[Self]) -> Self;
}

impl SumElement for u32 {
    const WIDTH: ElementWidth = ElementWidth::U32;

    #[inline]
    fn from_u128_wrapping(value: u128) -> Self {
        value as u32
    }

    fn simd128_sum(values: &[u32]) -> u32 {
        #[cfg(target_arch = "x86_64")]
        {
            if common::cpu_features::has_ssse3() {
                return unsafe { crate::kernels::sse::sum_u32(values) };
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if common::cpu_features::has_neon() {
                return unsafe { crate::kernels::neon::sum128_u32(values) };
            }
        }
        scalar::single(values)
    }

    fn simd256_sum(values: &[u32]) -> u32 {
        #[cfg(target_arch = "x86_64")]
        {
            if common::cpu_features::has_avx2() {
                return unsafe { crate::kernels::avx2::sum_u32(values) };
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if common::cpu_features::has_neon() {
                return unsafe { crate::kernels::neon::sum256_u32(values) };
            }
        }
        scalar::single(values)
    }
}

impl SumElement for u64 {
    const WIDTH: ElementWidth = ElementWidth::U64;

    #[inline]
    fn from_u128_wrapping(value: u128) -> Self {
        value as u64
    }

    fn simd128_sum(values: &[u64]) -> u64 {
        #[cfg(target_arch = "x86_64")]
        {
            if common::cpu_features::has_ssse3() {
                return unsafe { crate::kernels::sse::sum_u64(values) };
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if common::cpu_features::has_neon() {
                return unsafe { crate::kernels::neon::sum128_u64(values) };
            }
        }
        scalar::single(values)
    }

    fn simd256_sum(values: &[u64]) -> u64 {
        #[cfg(target_arch = "x86_64")]
        {
            if common::cpu_features::has_avx2() {
                return unsafe { crate::kernels::avx2::sum_u64(values) };
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if common::cpu_features::has_neon() {
                return unsafe { crate::kernels::neon::sum256_u64(values) };
            }
        }
        scalar::single(values)
    }
}

/// Wrapping sum of `0..count`, i.e. `count * (count - 1) / 2` truncated to `T`.
pub fn sequential_sum<T: SumElement>(count: usize) -> T {
    let n = count as u128;
    T::from_u128_wrapping(n * n.saturating_sub(1) / 2)
}
