//! SSE2 lane backend.
//!
//! SSE2 is part of the x86_64 baseline, so this backend needs no feature
//! detection.

use std::arch::x86_64::*;

/// Four f32 lanes in one 128-bit register.
#[derive(Clone, Copy)]
pub(crate) struct F32x4(__m128);

impl F32x4 {
    #[inline(always)]
    pub fn zero() -> Self {
        unsafe { Self(_mm_setzero_ps()) }
    }

    /// Load 4 consecutive values starting at `offset` (unaligned).
    #[inline(always)]
    pub fn load(slice: &[f32], offset: usize) -> Self {
        debug_assert!(offset + 4 <= slice.len());
        unsafe { Self(_mm_loadu_ps(slice.as_ptr().add(offset))) }
    }

    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        unsafe { Self(_mm_mul_ps(self.0, other.0)) }
    }

    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        unsafe { Self(_mm_add_ps(self.0, other.0)) }
    }

    /// Pairwise horizontal sum: `(l0 + l1) + (l2 + l3)`.
    #[inline(always)]
    pub fn horizontal_sum(self) -> f32 {
        unsafe {
            // self = [l0, l1, l2, l3]
            let shuf = _mm_movehdup_ps(self.0); // [l1, l1, l3, l3]
            let sums = _mm_add_ps(self.0, shuf); // [l0+l1, _, l2+l3, _]
            let hi = _mm_movehl_ps(sums, sums); // [l2+l3, _, _, _]
            _mm_cvtss_f32(_mm_add_ss(sums, hi))
        }
    }
}
