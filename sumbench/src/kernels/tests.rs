//! Tests for summation kernels.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

use super::*;
use crate::element::sequential_sum;

fn sequential<T: SumElement>(count: usize) -> Vec<T> {
    (0..count).map(T::from_index).collect()
}

fn assert_all_kernels_sum_sequential<T: SumElement>(count: usize) {
    let values = sequential::<T>(count);
    let expected = sequential_sum::<T>(count);
    for kernel in KernelKind::iter() {
        assert_eq!(
            kernel.sum(&values),
            expected,
            "{kernel} [{}] count={count}",
            T::WIDTH
        );
    }
}

fn assert_all_kernels_agree<T: SumElement>(values: &[T]) {
    let reference = scalar::single(values);
    for kernel in KernelKind::iter() {
        assert_eq!(
            kernel.sum(values),
            reference,
            "{kernel} [{}] len={}",
            T::WIDTH,
            values.len()
        );
    }
}

// ---------------------------------------------------------------------------
// Sequential inputs
// ---------------------------------------------------------------------------

#[test]
fn test_sum_5000_u32() {
    let values = sequential::<u32>(5000);
    for kernel in KernelKind::iter() {
        assert_eq!(kernel.sum(&values), 12_497_500u32, "{kernel}");
    }
}

#[test]
fn test_sum_5000_u64() {
    let values = sequential::<u64>(5000);
    for kernel in KernelKind::iter() {
        assert_eq!(kernel.sum(&values), 12_497_500u64, "{kernel}");
    }
}

#[test]
fn test_sum_odd_length() {
    assert_all_kernels_sum_sequential::<u32>(5001);
    assert_all_kernels_sum_sequential::<u64>(5001);
}

#[test]
fn test_sum_empty() {
    for kernel in KernelKind::iter() {
        assert_eq!(kernel.sum::<u32>(&[]), 0, "{kernel}");
        assert_eq!(kernel.sum::<u64>(&[]), 0, "{kernel}");
    }
}

#[test]
fn test_sum_single() {
    for kernel in KernelKind::iter() {
        assert_eq!(kernel.sum(&[42u32]), 42, "{kernel}");
        assert_eq!(kernel.sum(&[42u64]), 42, "{kernel}");
    }
}

#[test]
fn test_sum_every_tail_length() {
    // Covers every remainder of the 2/4/8-wide loops, plus partition counts
    // larger than the input.
    for count in 0..=40 {
        assert_all_kernels_sum_sequential::<u32>(count);
        assert_all_kernels_sum_sequential::<u64>(count);
    }
}

#[test]
fn test_sum_large_u32_wraps() {
    // 100_000 * 99_999 / 2 overflows u32.
    assert_all_kernels_sum_sequential::<u32>(100_000);
}

// ---------------------------------------------------------------------------
// Random inputs
// ---------------------------------------------------------------------------

#[test]
fn test_kernels_agree_on_random_u32() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for len in [3, 17, 256, 1023, 4099, 65_537] {
        let values: Vec<u32> = (0..len).map(|_| rng.random()).collect();
        assert_all_kernels_agree(&values);
    }
}

#[test]
fn test_kernels_agree_on_random_u64() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for len in [3, 17, 256, 1023, 4099, 65_537] {
        let values: Vec<u64> = (0..len).map(|_| rng.random()).collect();
        assert_all_kernels_agree(&values);
    }
}

#[test]
fn test_kernels_agree_on_max_values() {
    assert_all_kernels_agree(&vec![u32::MAX; 1001]);
    assert_all_kernels_agree(&vec![u64::MAX; 1001]);
}

// ---------------------------------------------------------------------------
// Scalar variants
// ---------------------------------------------------------------------------

#[test]
fn test_unroll_remainder() {
    let values: Vec<u32> = (1..=7).collect();
    assert_eq!(scalar::unroll2(&values), 28);
    assert_eq!(scalar::unroll4(&values), 28);
    assert_eq!(scalar::iter_fold(&values), 28);
}

#[test]
fn test_scalar_wraps() {
    assert_eq!(scalar::single(&[u32::MAX, 2]), 1);
    assert_eq!(scalar::unroll4(&[u64::MAX, 1, 1]), 1);
}

// ---------------------------------------------------------------------------
// SIMD vs scalar consistency
// ---------------------------------------------------------------------------

#[test]
fn test_simd_vs_scalar_sum() {
    let values: Vec<u32> = (0..1000).map(|x| x * 7 + 3).collect();
    assert_eq!(simd128(&values), scalar::single(&values));
    assert_eq!(simd256(&values), scalar::single(&values));

    let values: Vec<u64> = (0..1000u64).map(|x| x.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect();
    assert_eq!(simd128(&values), scalar::single(&values));
    assert_eq!(simd256(&values), scalar::single(&values));
}

#[cfg(target_arch = "x86_64")]
#[test]
fn test_sse_direct() {
    if !common::cpu_features::has_ssse3() {
        eprintln!("SSSE3 not available, skipping test");
        return;
    }
    let values: Vec<u32> = (0..13).collect();
    assert_eq!(unsafe { sse::sum_u32(&values) }, 78);
    let values: Vec<u64> = (0..13).collect();
    assert_eq!(unsafe { sse::sum_u64(&values) }, 78);
}

#[cfg(target_arch = "x86_64")]
#[test]
fn test_avx2_direct() {
    if !common::cpu_features::has_avx2() {
        eprintln!("AVX2 not available, skipping test");
        return;
    }
    let values: Vec<u32> = (0..21).collect();
    assert_eq!(unsafe { avx2::sum_u32(&values) }, 210);
    let values: Vec<u64> = (0..21).collect();
    assert_eq!(unsafe { avx2::sum_u64(&values) }, 210);
}

#[cfg(target_arch = "aarch64")]
#[test]
fn test_neon_direct() {
    let values: Vec<u32> = (0..21).collect();
    assert_eq!(unsafe { neon::sum128_u32(&values) }, 210);
    assert_eq!(unsafe { neon::sum256_u32(&values) }, 210);
    let values: Vec<u64> = (0..21).collect();
    assert_eq!(unsafe { neon::sum128_u64(&values) }, 210);
    assert_eq!(unsafe { neon::sum256_u64(&values) }, 210);
}

// ---------------------------------------------------------------------------
// Parallel partitioning
// ---------------------------------------------------------------------------

#[test]
fn test_partitioned_uneven_split() {
    // 5001 is not divisible by 4: the last partition must reach the end.
    let values = sequential::<u32>(5001);
    for parts in [1, 2, 3, 4, 7, 16] {
        assert_eq!(
            parallel::partitioned(&values, parts, scalar::single::<u32>),
            sequential_sum::<u32>(5001),
            "parts={parts}"
        );
    }
}

#[test]
fn test_partitioned_more_parts_than_values() {
    let values: Vec<u64> = vec![1, 2, 3];
    assert_eq!(parallel::partitioned(&values, 64, simd256::<u64>), 6);
}

#[test]
fn test_partitioned_in_dedicated_pool() {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(3)
        .build()
        .unwrap();
    let values = sequential::<u64>(10_007);
    let result = pool.install(|| KernelKind::ParallelSimd128.sum(&values));
    assert_eq!(result, sequential_sum::<u64>(10_007));
}

#[test]
fn test_is_parallel() {
    let parallel: Vec<KernelKind> = KernelKind::iter().filter(|k| k.is_parallel()).collect();
    assert_eq!(
        parallel,
        vec![
            KernelKind::ParallelScalar,
            KernelKind::ParallelSimd128,
            KernelKind::ParallelSimd256
        ]
    );
}

#[test]
fn test_kernel_names() {
    assert_eq!(KernelKind::SingleScalar.to_string(), "SingleScalar");
    assert_eq!(KernelKind::Simd256.to_string(), "Simd256");
    assert_eq!(KernelKind::iter().count(), 9);
}
