//! # Vec-Reduce
//!
//! Dot-product reduction kernels at three performance tiers: a scalar
//! baseline, an unrolled multi-accumulator variant, and a 4-lane SIMD
//! variant with scalar tail handling.
//!
//! Every tier exposes the same `dot(a, b, n) -> f32` contract and the
//! tiers are drop-in substitutes for each other. Tier selection is a
//! strategy resolved once at startup, never a branch in the hot loop.

pub mod reduce;
pub mod registry;
pub mod utils;

/// Re-export tui from utils for the CLI
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::reduce::{dot_scalar, dot_unrolled, dot_vector};
    pub use crate::registry::{all_reducers, default_reducer, find_reducer, Reducer};
}
