//! CPU feature detection for runtime SIMD dispatch.
//!
//! Detection runs once and is cached. Use these functions instead of the
//! `is_x86_feature_detected!` macro directly to avoid repeated CPUID calls.

use std::fmt;
use std::sync::OnceLock;

/// CPU feature flags detected once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuFeatures {
    pub sse2: bool,
    pub ssse3: bool,
    pub avx2: bool,
    pub neon: bool,
}

static FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

/// Get cached CPU features (detected once on first call).
#[cfg(target_arch = "x86_64")]
#[inline]
pub fn get() -> CpuFeatures {
    *FEATURES.get_or_init(|| CpuFeatures {
        sse2: is_x86_feature_detected!("sse2"),
        ssse3: is_x86_feature_detected!("ssse3"),
        avx2: is_x86_feature_detected!("avx2"),
        neon: false,
    })
}

/// Get cached CPU features. NEON is mandatory on aarch64.
#[cfg(target_arch = "aarch64")]
#[inline]
pub fn get() -> CpuFeatures {
    *FEATURES.get_or_init(|| CpuFeatures {
        neon: std::arch::is_aarch64_feature_detected!("neon"),
        ..CpuFeatures::default()
    })
}

/// Get cached CPU features - stub for other platforms.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline]
pub fn get() -> CpuFeatures {
    *FEATURES.get_or_init(CpuFeatures::default)
}

/// Check if SSE2 is available.
#[inline]
pub fn has_sse2() -> bool {
    get().sse2
}

/// Check if SSSE3 is available (horizontal integer adds).
#[inline]
pub fn has_ssse3() -> bool {
    get().ssse3
}

/// Check if AVX2 is available.
#[inline]
pub fn has_avx2() -> bool {
    get().avx2
}

/// Check if NEON is available.
#[inline]
pub fn has_neon() -> bool {
    get().neon
}

/// Widest vector instruction set usable for integer summation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdLevel {
    Avx2,
    Ssse3,
    Neon,
    Scalar,
}

impl fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimdLevel::Avx2 => "avx2",
            SimdLevel::Ssse3 => "ssse3",
            SimdLevel::Neon => "neon",
            SimdLevel::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

/// Best available SIMD level on this CPU.
pub fn simd_level() -> SimdLevel {
    let f = get();
    if f.avx2 {
        SimdLevel::Avx2
    } else if f.ssse3 {
        SimdLevel::Ssse3
    } else if f.neon {
        SimdLevel::Neon
    } else {
        SimdLevel::Scalar
    }
}
