//! NEON summation kernels (aarch64).
//!
//! NEON registers are 128 bits wide; the 256-bit variants keep two
//! accumulators and consume two registers per iteration.

use std::arch::aarch64::*;

/// Sum u32 values in four 32-bit lanes.
///
/// # Safety
/// Caller must ensure NEON is available (always true on aarch64).
#[target_feature(enable = "neon")]
pub unsafe fn sum128_u32(values: &[u32]) -> u32 {
    unsafe {
        let mut acc = vdupq_n_u32(0);
        let chunks = values.chunks_exact(4);
        let remainder = chunks.remainder();

        for chunk in chunks {
            acc = vaddq_u32(acc, vld1q_u32(chunk.as_ptr()));
        }

        let total = vaddvq_u32(acc);
        remainder.iter().fold(total, |acc, &v| acc.wrapping_add(v))
    }
}

/// Sum u32 values in a pair of four-lane accumulators.
///
/// # Safety
/// Caller must ensure NEON is available (always true on aarch64).
#[target_feature(enable = "neon")]
pub unsafe fn sum256_u32(values: &[u32]) -> u32 {
    unsafe {
        let mut acc_lo = vdupq_n_u32(0);
        let mut acc_hi = vdupq_n_u32(0);
        let chunks = values.chunks_exact(8);
        let remainder = chunks.remainder();

        for chunk in chunks {
            let ptr = chunk.as_ptr();
            acc_lo = vaddq_u32(acc_lo, vld1q_u32(ptr));
            acc_hi = vaddq_u32(acc_hi, vld1q_u32(ptr.add(4)));
        }

        let total = vaddvq_u32(vaddq_u32(acc_lo, acc_hi));
        remainder.iter().fold(total, |acc, &v| acc.wrapping_add(v))
    }
}

/// Sum u64 values in two 64-bit lanes.
///
/// # Safety
/// Caller must ensure NEON is available (always true on aarch64).
#[target_feature(enable = "neon")]
pub unsafe fn sum128_u64(values: &[u64]) -> u64 {
    unsafe {
        let mut acc = vdupq_n_u64(0);
        let chunks = values.chunks_exact(2);
        let remainder = chunks.remainder();

        for chunk in chunks {
            acc = vaddq_u64(acc, vld1q_u64(chunk.as_ptr()));
        }

        let total = vaddvq_u64(acc);
        remainder.iter().fold(total, |acc, &v| acc.wrapping_add(v))
    }
}

/// Sum u64 values in a pair of two-lane accumulators.
///
/// # Safety
/// Caller must ensure NEON is available (always true on aarch64).
#[target_feature(enable = "neon")]
pub unsafe fn sum256_u64(values: &[u64]) -> u64 {
    unsafe {
        let mut acc_lo = vdupq_n_u64(0);
        let mut acc_hi = vdupq_n_u64(0);
        let chunks = values.chunks_exact(4);
        let remainder = chunks.remainder();

        for chunk in chunks {
            let ptr = chunk.as_ptr();
            acc_lo = vaddq_u64(acc_lo, vld1q_u64(ptr));
            acc_hi = vaddq_u64(acc_hi, vld1q_u64(ptr.add(2)));
        }

        let total = vaddvq_u64(vaddq_u64(acc_lo, acc_hi));
        remainder.iter().fold(total, |acc, &v| acc.wrapping_add(v))
    }
}
