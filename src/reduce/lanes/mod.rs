//! Fixed-width lane facade for the vector tier.
//!
//! Exactly the operations the reduction needs: unaligned load of four
//! consecutive f32 values, elementwise multiply, add, and a pairwise
//! horizontal sum. Intrinsics stay behind this facade; targets without a
//! wired-up instruction set get a plain-array backend the compiler can
//! auto-vectorize.
//!
//! The horizontal sum combines lanes `(l0 + l1) + (l2 + l3)`, the same
//! pairing the unrolled tier uses for its accumulators.

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "x86_64")]
mod sse2;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
mod fallback;

#[cfg(target_arch = "aarch64")]
pub(crate) use neon::F32x4;
#[cfg(target_arch = "x86_64")]
pub(crate) use sse2::F32x4;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub(crate) use fallback::F32x4;
