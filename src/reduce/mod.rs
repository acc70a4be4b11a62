//! # Dot-Product Reduction
//!
//! Computes the dot product of two f32 sequences:
//!
//! `dot(a, b, n) = Σ(a[i] * b[i])` for `i` in `0..n`
//!
//! Three tiers share one contract and are drop-in substitutes for each
//! other:
//!
//! - **scalar**: one running total, the correctness baseline
//! - **unrolled**: four independent accumulators to break the serial
//!   dependency chain of naive accumulation
//! - **vector**: 4-lane SIMD accumulation with a scalar tail loop
//!
//! Accumulation order differs between tiers, so for the same input the
//! tiers agree within a tolerance rather than bit-exactly. All tiers are
//! pure functions: no allocation, no retained state, no side effects.

pub mod bench;
pub(crate) mod lanes;
mod scalar;
#[cfg(test)]
mod test;
mod unrolled;
mod vector;

pub use scalar::dot_scalar;
pub use unrolled::dot_unrolled;
pub use vector::dot_vector;

use crate::registry::all_reducers;
use rand::Rng;

/// Verify every tier against the scalar baseline.
///
/// Uses a non-multiple-of-4 size so the unrolled and vector tail paths
/// are exercised. Accumulation order affects the low bits, nothing more,
/// so comparison is within a small tolerance.
pub fn verify_tiers() -> Result<(), String> {
    let mut rng = rand::rng();
    let size = 1023;
    let a: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
    let b: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();

    let expected = dot_scalar(&a, &b, size);

    for reducer in all_reducers() {
        let result = reducer.dot(&a, &b, size);
        let diff = (result - expected).abs();

        if diff > 1e-4 {
            return Err(format!(
                "Tier '{}' failed verification. Expected {}, got {}, diff {}",
                reducer.name(),
                expected,
                result,
                diff
            ));
        }
    }

    Ok(())
}
