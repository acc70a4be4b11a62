//! Raw timestamp-counter reads for the cycle-counting measurement mode.

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!("the cpu_cycles feature needs x86_64 or aarch64; build with --features use_time");

/// Read the time-stamp counter.
///
/// Fenced on both sides so neighboring instructions cannot drift into the
/// timed region.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn read_cycles() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        let tsc = _rdtsc();
        _mm_lfence();
        tsc
    }
}

/// Read CNTVCT_EL0, the virtual counter readable from userspace.
///
/// Fixed-frequency ticks rather than true cycles, but consistent across
/// cores.
#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn read_cycles() -> u64 {
    let ticks: u64;
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) ticks);
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::read_cycles;

    #[test]
    fn test_counter_advances() {
        let a = read_cycles();
        for _ in 0..1000 {
            std::hint::black_box(0u64);
        }
        let b = read_cycles();
        // Small backwards steps can happen across a migration; anything
        // large means the read itself is broken.
        assert!(b >= a || a - b < 1000, "counter jumped backwards: {} -> {}", a, b);
    }
}
