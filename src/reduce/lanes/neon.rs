//! NEON lane backend for aarch64.

use std::arch::aarch64::*;

/// Four f32 lanes in one 128-bit register.
#[derive(Clone, Copy)]
pub(crate) struct F32x4(float32x4_t);

impl F32x4 {
    #[inline(always)]
    pub fn zero() -> Self {
        unsafe { Self(vdupq_n_f32(0.0)) }
    }

    /// Load 4 consecutive values starting at `offset` (unaligned).
    #[inline(always)]
    pub fn load(slice: &[f32], offset: usize) -> Self {
        debug_assert!(offset + 4 <= slice.len());
        unsafe { Self(vld1q_f32(slice.as_ptr().add(offset))) }
    }

    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        unsafe { Self(vmulq_f32(self.0, other.0)) }
    }

    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        unsafe { Self(vaddq_f32(self.0, other.0)) }
    }

    /// Pairwise horizontal sum: `(l0 + l1) + (l2 + l3)`.
    #[inline(always)]
    pub fn horizontal_sum(self) -> f32 {
        unsafe {
            // [l0+l1, l2+l3], then the final pair
            let pairs = vpadd_f32(vget_low_f32(self.0), vget_high_f32(self.0));
            vpadds_f32(pairs)
        }
    }
}
