//! SSSE3 128-bit summation kernels (x86_64).

use std::arch::x86_64::*;

/// Horizontal sum of four 32-bit lanes.
#[inline]
#[target_feature(enable = "ssse3")]
unsafe fn horizontal_sum_epi32(v: __m128i) -> u32 {
    // [a, b, c, d] -> [a+b, c+d, a+b, c+d] -> [a+b+c+d, ...]
    let v = _mm_hadd_epi32(v, v);
    let v = _mm_hadd_epi32(v, v);
    _mm_cvtsi128_si32(v) as u32
}

/// Horizontal sum of two 64-bit lanes.
#[inline]
#[target_feature(enable = "ssse3")]
unsafe fn horizontal_sum_epi64(v: __m128i) -> u64 {
    let high = _mm_unpackhi_epi64(v, v);
    _mm_cvtsi128_si64(_mm_add_epi64(v, high)) as u64
}

/// Sum u32 values in four 32-bit lanes.
///
/// # Safety
/// Caller must ensure SSSE3 is available.
#[target_feature(enable = "ssse3")]
pub unsafe fn sum_u32(values: &[u32]) -> u32 {
    unsafe {
        let mut acc = _mm_setzero_si128();
        let chunks = values.chunks_exact(4);
        let remainder = chunks.remainder();

        for chunk in chunks {
            let v = _mm_loadu_si128(chunk.as_ptr() as *const __m128i);
            acc = _mm_add_epi32(acc, v);
        }

        let total = horizontal_sum_epi32(acc);
        remainder.iter().fold(total, |acc, &v| acc.wrapping_add(v))
    }
}

/// Sum u64 values in two 64-bit lanes.
///
/// # Safety
/// Caller must ensure SSSE3 is available.
#[target_feature(enable = "ssse3")]
pub unsafe fn sum_u64(values: &[u64]) -> u64 {
    unsafe {
        let mut acc = _mm_setzero_si128();
        let chunks = values.chunks_exact(2);
        let remainder = chunks.remainder();

        for chunk in chunks {
            let v = _mm_loadu_si128(chunk.as_ptr() as *const __m128i);
            acc = _mm_add_epi64(acc, v);
        }

        let total = horizontal_sum_epi64(acc);
        remainder.iter().fold(total, |acc, &v| acc.wrapping_add(v))
    }
}
