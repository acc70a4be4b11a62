//! Benchmark driver for the reduction tiers.

use crate::registry::{all_reducers, Reducer};
use crate::utils::bench::SeededRng;
use crate::utils::timer::{measure_variants, TimingConfig, Variant, VariantResult};
use std::hint::black_box;

/// Measure every tier (or a single named tier) on shared random input.
///
/// All tiers see the same buffers so the relative-error column compares
/// like with like.
pub fn run_benchmarks(
    size: usize,
    runs: usize,
    seed: u64,
    only: Option<&str>,
) -> Vec<VariantResult> {
    let mut rng = SeededRng::new(seed);
    let a: Vec<f32> = (0..size).map(|_| rng.next_f32_range()).collect();
    let b: Vec<f32> = (0..size).map(|_| rng.next_f32_range()).collect();

    let variants: Vec<Variant> = all_reducers()
        .iter()
        .copied()
        .filter(|r| only.map_or(true, |name| r.name() == name))
        .map(|reducer| tier_variant(reducer, &a, &b))
        .collect();

    let config = TimingConfig {
        runs_per_variant: runs,
        ..TimingConfig::default()
    };

    measure_variants(variants, &config)
}

/// One measurable variant per tier; the closure times a single reduction.
fn tier_variant<'a>(reducer: &'static dyn Reducer, a: &'a [f32], b: &'a [f32]) -> Variant<'a> {
    let n = a.len();
    Variant {
        name: reducer.name(),
        description: reducer.description(),
        run: Box::new(move || {
            let (elapsed, result) =
                crate::measure!(reducer.dot(black_box(a), black_box(b), black_box(n)));
            (elapsed, Some(result as f64))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_benchmarks_all_tiers() {
        let results = run_benchmarks(64, 3, 42, None);
        assert_eq!(results.len(), 3);

        // Same seed, same buffers: every tier reduces the same input and
        // the sample results must agree within accumulation tolerance.
        let baseline = results[0].result_sample.expect("baseline sample");
        for r in &results {
            let sample = r.result_sample.expect("tier sample");
            assert!(
                (sample - baseline).abs() < 1e-4,
                "tier {} diverged: {} vs {}",
                r.name,
                sample,
                baseline
            );
        }
    }

    #[test]
    fn test_run_benchmarks_single_tier() {
        let results = run_benchmarks(64, 2, 7, Some("vector"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "vector");
    }
}
