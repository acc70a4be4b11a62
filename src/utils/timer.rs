//! Measurement loop shared by all benchmarks.
//!
//! Every sample takes the same path: warm the variants up, lay out a
//! randomized schedule, pin the thread while sampling, then reduce the
//! raw samples to statistics. Interleaving the variants in one shuffled
//! schedule spreads frequency scaling and scheduler noise evenly instead
//! of letting it land on whichever variant happened to run last.

use std::hint::black_box;
use std::time::Duration;

use super::bench::{shuffle, time_seed, to_nanos, Measurement};
use super::cpu_affinity::CpuPinGuard;

/// When to hold the CPU pin during a measurement run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// One pin around the whole run (minimal overhead).
    Global,
    /// Pin and unpin around every sample (more accurate per call).
    #[default]
    PerExecution,
}

/// Knobs for a measurement run.
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Samples collected per variant (default: 30)
    pub runs_per_variant: usize,
    /// Untimed executions per variant before sampling starts (default: 10)
    pub warmup_iterations: usize,
    /// When to hold the CPU pin (default: PerExecution)
    pub pin_strategy: PinStrategy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
        }
    }
}

/// One measurable unit of work.
///
/// The closure times itself (via [`crate::measure!`]) so dispatch
/// overhead never lands inside the sample, and reports the value it
/// computed for the relative-error column.
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Statistics for one measured variant.
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    /// Average sample, nanoseconds (or raw cycles) packed into a `Duration`
    pub avg: Duration,
    /// Average without the integer truncation of `avg`
    pub avg_exact: f64,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub std_dev: Duration,
    /// Samples actually collected
    pub runs: usize,
    /// Value computed by the last sample
    pub result_sample: Option<f64>,
}

impl VariantResult {
    fn from_samples(
        name: &str,
        description: &str,
        samples: &[Measurement],
        result_sample: Option<f64>,
    ) -> Self {
        let mut nanos: Vec<u64> = samples.iter().map(|m| to_nanos(*m)).collect();
        nanos.sort_unstable();

        let runs = nanos.len();
        if runs == 0 {
            return Self {
                name: name.to_string(),
                description: description.to_string(),
                avg: Duration::ZERO,
                avg_exact: 0.0,
                median: Duration::ZERO,
                min: Duration::ZERO,
                max: Duration::ZERO,
                std_dev: Duration::ZERO,
                runs: 0,
                result_sample: None,
            };
        }

        let total: u64 = nanos.iter().sum();
        let avg_exact = total as f64 / runs as f64;
        let variance = nanos
            .iter()
            .map(|&n| (n as f64 - avg_exact).powi(2))
            .sum::<f64>()
            / (runs - 1).max(1) as f64;

        Self {
            name: name.to_string(),
            description: description.to_string(),
            avg: Duration::from_nanos(avg_exact as u64),
            avg_exact,
            median: Duration::from_nanos(nanos[runs / 2]),
            min: Duration::from_nanos(nanos[0]),
            max: Duration::from_nanos(nanos[runs - 1]),
            std_dev: Duration::from_nanos(variance.sqrt() as u64),
            runs,
            result_sample,
        }
    }
}

/// Measure a set of variants and return one [`VariantResult`] each.
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    // One schedule slot per (variant, sample), shuffled.
    let mut schedule: Vec<usize> = (0..variants.len())
        .flat_map(|idx| std::iter::repeat(idx).take(config.runs_per_variant))
        .collect();
    shuffle(&mut schedule, time_seed());

    let mut samples: Vec<Vec<Measurement>> = variants
        .iter()
        .map(|_| Vec::with_capacity(config.runs_per_variant))
        .collect();
    let mut last_result: Vec<Option<f64>> = vec![None; variants.len()];

    let _run_pin = matches!(config.pin_strategy, PinStrategy::Global).then(CpuPinGuard::new);
    for idx in schedule {
        let _sample_pin =
            matches!(config.pin_strategy, PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (took, result) = (variants[idx].run)();
        samples[idx].push(took);
        last_result[idx] = result;
    }

    variants
        .iter()
        .enumerate()
        .map(|(idx, v)| {
            VariantResult::from_samples(v.name, v.description, &samples[idx], last_result[idx])
        })
        .collect()
}
