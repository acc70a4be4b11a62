//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

// Re-export commonly used items
pub use bench::{shuffle, time_seed, SeededRng};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{measure_variants, TimingConfig, Variant, VariantResult};

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub use bench::{elapsed, now};
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub use cycles::read_cycles;
