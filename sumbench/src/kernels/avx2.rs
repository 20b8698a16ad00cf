//! AVX2 256-bit summation kernels (x86_64).

use std::arch::x86_64::*;

/// Horizontal sum of eight 32-bit lanes.
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn horizontal_sum_256_epi32(v: __m256i) -> u32 {
    // Fold the high 128 bits onto the low 128 bits, then reduce 4 lanes.
    let low = _mm256_castsi256_si128(v);
    let high = _mm256_extracti128_si256(v, 1);
    let sum128 = _mm_add_epi32(low, high);

    let sum128 = _mm_hadd_epi32(sum128, sum128);
    let sum128 = _mm_hadd_epi32(sum128, sum128);
    _mm_cvtsi128_si32(sum128) as u32
}

/// Horizontal sum of four 64-bit lanes.
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn horizontal_sum_256_epi64(v: __m256i) -> u64 {
    let low = _mm256_castsi256_si128(v);
    let high = _mm256_extracti128_si256(v, 1);
    let sum128 = _mm_add_epi64(low, high);

    let high64 = _mm_unpackhi_epi64(sum128, sum128);
    _mm_cvtsi128_si64(_mm_add_epi64(sum128, high64)) as u64
}

/// Sum u32 values in eight 32-bit lanes.
///
/// # Safety
/// Caller must ensure AVX2 is available.
#[target_feature(enable = "avx2")]
pub unsafe fn sum_u32(values: &[u32]) -> u32 {
    unsafe {
        let mut acc = _mm256_setzero_si256();
        let chunks = values.chunks_exact(8);
        let remainder = chunks.remainder();

        for chunk in chunks {
            let v = _mm256_loadu_si256(chunk.as_ptr() as *const __m256i);
            acc = _mm256_add_epi32(acc, v);
        }

        let total = horizontal_sum_256_epi32(acc);
        remainder.iter().fold(total, |acc, &v| acc.wrapping_add(v))
    }
}

/// Sum u64 values in four 64-bit lanes.
///
/// # Safety
/// Caller must ensure AVX2 is available.
#[target_feature(enable = "avx2")]
pub unsafe fn sum_u64(values: &[u64]) -> u64 {
    unsafe {
        let mut acc = _mm256_setzero_si256();
        let chunks = values.chunks_exact(4);
        let remainder = chunks.remainder();

        for chunk in chunks {
            let v = _mm256_loadu_si256(chunk.as_ptr() as *const __m256i);
            acc = _mm256_add_epi64(acc, v);
        }

        let total = horizontal_sum_256_epi64(acc);
        remainder.iter().fold(total, |acc, &v| acc.wrapping_add(v))
    }
}
