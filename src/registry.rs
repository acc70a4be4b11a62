//! Reduction tier registry and selection.
//!
//! Tier choice is a deployment decision, not a hot-loop branch: callers
//! resolve a [`Reducer`] once at startup, by name or via
//! [`default_reducer`]'s compile-time choice, and invoke it from then on.

use crate::reduce::{dot_scalar, dot_unrolled, dot_vector};

/// Strategy interface shared by the three reduction tiers.
pub trait Reducer: Send + Sync {
    /// Tier name (e.g. "vector")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Compute the dot product of the first `n` elements of `a` and `b`.
    ///
    /// # Panics
    /// Panics if either slice is shorter than `n`.
    fn dot(&self, a: &[f32], b: &[f32], n: usize) -> f32;
}

/// Sequential accumulation into a single running total.
pub struct ScalarReducer;

/// Four independent accumulators over strided sub-sequences.
pub struct UnrolledReducer;

/// 4-lane SIMD accumulation with scalar tail handling.
pub struct VectorReducer;

impl Reducer for ScalarReducer {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn description(&self) -> &'static str {
        "Sequential accumulation, the correctness baseline"
    }

    fn dot(&self, a: &[f32], b: &[f32], n: usize) -> f32 {
        dot_scalar(a, b, n)
    }
}

impl Reducer for UnrolledReducer {
    fn name(&self) -> &'static str {
        "unrolled"
    }

    fn description(&self) -> &'static str {
        "4x unrolled scalar loop with independent accumulators"
    }

    fn dot(&self, a: &[f32], b: &[f32], n: usize) -> f32 {
        dot_unrolled(a, b, n)
    }
}

impl Reducer for VectorReducer {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn description(&self) -> &'static str {
        "4-lane SIMD accumulation with a scalar tail loop"
    }

    fn dot(&self, a: &[f32], b: &[f32], n: usize) -> f32 {
        dot_vector(a, b, n)
    }
}

/// All tiers, baseline first. Table order is display order.
static REDUCERS: [&dyn Reducer; 3] = [&ScalarReducer, &UnrolledReducer, &VectorReducer];

/// Get all registered tiers
pub fn all_reducers() -> &'static [&'static dyn Reducer] {
    &REDUCERS
}

/// Find a tier by name
pub fn find_reducer(name: &str) -> Option<&'static dyn Reducer> {
    REDUCERS.iter().copied().find(|r| r.name() == name)
}

/// List tier names
pub fn reducer_names() -> Vec<&'static str> {
    REDUCERS.iter().map(|r| r.name()).collect()
}

/// The preferred tier for the build target, resolved at compile time.
///
/// The vector tier is selected where the 4-lane backend maps onto real
/// vector instructions; elsewhere the unrolled tier is the better default
/// since the fallback backend depends on the auto-vectorizer.
pub fn default_reducer() -> &'static dyn Reducer {
    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    {
        &VectorReducer
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        &UnrolledReducer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_reducer_by_name() {
        for name in ["scalar", "unrolled", "vector"] {
            let reducer = find_reducer(name).expect("tier should be registered");
            assert_eq!(reducer.name(), name);
        }
        assert!(find_reducer("avx512").is_none());
    }

    #[test]
    fn test_baseline_is_first() {
        assert_eq!(all_reducers()[0].name(), "scalar");
    }

    #[test]
    fn test_reducer_names_match_table() {
        assert_eq!(reducer_names(), vec!["scalar", "unrolled", "vector"]);
    }

    #[test]
    fn test_default_reducer_is_registered() {
        let default = default_reducer();
        assert!(find_reducer(default.name()).is_some());
    }

    #[test]
    fn test_trait_delegates_to_kernels() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [1.0, 1.0, 1.0, 1.0, 1.0];
        for reducer in all_reducers() {
            assert_eq!(reducer.dot(&a, &b, 5), 15.0, "tier {}", reducer.name());
        }
    }
}
