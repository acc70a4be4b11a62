//! Measurement plumbing shared by the benchmark harness.
//!
//! By default (`cpu_cycles` feature) a sample is a raw cycle-counter
//! delta; build with `--features use_time` or `--no-default-features` to
//! sample wall-clock time instead. Everything downstream of [`now`] and
//! [`elapsed`] is feature-agnostic.

use std::time::Duration;

// ============================================================================
// Measurement abstraction
// ============================================================================
//
// Cycles when: cpu_cycles enabled AND use_time disabled.
// Wall-clock when: use_time enabled OR cpu_cycles disabled.

/// One timing sample: a cycle count or a `Duration`, by feature.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

/// Start a sample.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Measurement {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> std::time::Instant {
    std::time::Instant::now()
}

/// Close a sample opened by [`now`].
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Measurement) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: std::time::Instant) -> Measurement {
    start.elapsed()
}

/// Sample as a raw count: nanoseconds, or cycles in cycle mode.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_nanos(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Unit label for the active measurement mode.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(target_arch = "x86_64")]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Format a stored sample for display.
///
/// Stored values are `Duration`s whose nanosecond count carries the raw
/// cycle count when the `cpu_cycles` feature is active.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn format_measurement(d: Duration) -> String {
    format!("{} {}", d.as_nanos(), unit_name())
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn format_measurement(d: Duration) -> String {
    format!("{:?}", d)
}

/// Time one expression, returning `(Measurement, value)`.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = $e;
        ($crate::utils::bench::elapsed(start), value)
    }};
}

// ============================================================================
// Reproducible randomness
// ============================================================================

/// Small LCG for reproducible benchmark inputs and schedules.
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    /// Next f32 in [-1.0, 1.0)
    pub fn next_f32_range(&mut self) -> f32 {
        let n = self.next_u64();
        (n >> 40) as f32 / (1u64 << 24) as f32 * 2.0 - 1.0
    }
}

/// Fisher-Yates shuffle driven by a [`SeededRng`].
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = SeededRng::new(seed);
    for i in (1..slice.len()).rev() {
        let j = (rng.next_u64() >> 33) as usize % (i + 1);
        slice.swap(i, j);
    }
}

/// Seed drawn from the current time, for runs that want fresh randomness.
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

// ============================================================================
// CSV export
// ============================================================================

/// Raw timing data for a single tier at a single input size
pub struct RawTimingData {
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Export timing data to a CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;

    writeln!(file, "variant,input_size,avg_time_ns,result")?;

    for entry in data {
        writeln!(
            file,
            "{},{},{},{}",
            entry.variant_name,
            entry.input_size,
            entry.avg_nanos,
            entry
                .result_sample
                .map(|v| v.to_string())
                .unwrap_or_default()
        )?;
    }

    Ok(())
}
