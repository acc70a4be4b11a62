//! Vectorized implementation over the fixed-width lane facade.
//!
//! Processes 4 f32 values per iteration. Inputs shorter than one vector
//! width take the plain scalar path, and lengths that are not a multiple
//! of 4 finish in a scalar tail loop.

use super::lanes::F32x4;
use super::scalar::dot_scalar;

/// Compute the dot product using 4-lane SIMD accumulation.
///
/// Loads are unaligned; the inputs carry no alignment guarantee. The lane
/// accumulator reduces pairwise, matching the combination order of the
/// unrolled tier.
///
/// # Panics
/// Panics if either slice is shorter than `n`.
pub fn dot_vector(a: &[f32], b: &[f32], n: usize) -> f32 {
    assert!(a.len() >= n && b.len() >= n, "n exceeds input length");

    if n < 4 {
        // Too short to fill one vector register.
        return dot_scalar(a, b, n);
    }

    let chunks = n / 4;
    let remainder = n % 4;

    let mut acc = F32x4::zero();
    for i in 0..chunks {
        let idx = i * 4;
        let va = F32x4::load(a, idx);
        let vb = F32x4::load(b, idx);
        acc = acc.add(va.mul(vb));
    }

    let mut result = acc.horizontal_sum();

    // Handle remainder
    let base = chunks * 4;
    for i in 0..remainder {
        result += a[base + i] * b[base + i];
    }

    result
}
