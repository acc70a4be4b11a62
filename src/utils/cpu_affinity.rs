//! Thread-to-core pinning for stable measurements.
//!
//! A sample taken while the scheduler migrates the thread between cores
//! mixes the cache state of two cores and, in cycle-counting mode, two
//! counter bases. Pinning the thread for the duration of a sample removes
//! that noise. Linux has real affinity control through `libc`; everywhere
//! else (macOS only offers affinity hints) pinning reports as unavailable
//! and sampling proceeds unpinned.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        // Affinity mask in effect before the first pin, restored on unpin.
        static SAVED_MASK: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn current_core() -> Option<usize> {
        let core = unsafe { libc::sched_getcpu() };
        (core >= 0).then_some(core as usize)
    }

    pub fn pin(core: usize) -> bool {
        unsafe {
            let mut saved: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut saved) != 0 {
                return false;
            }
            SAVED_MASK.with(|cell| *cell.borrow_mut() = Some(saved));

            let mut mask: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut mask);
            libc::CPU_SET(core, &mut mask);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mask) == 0
        }
    }

    pub fn unpin() -> bool {
        SAVED_MASK.with(|cell| match cell.borrow_mut().take() {
            Some(mask) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mask) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_core() -> Option<usize> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn unpin() -> bool {
        true
    }
}

/// Pin the calling thread to the core it is currently running on.
///
/// Pinning in place avoids forcing a migration just to start measuring.
/// Returns the pinned core, or `None` where affinity control is
/// unavailable.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_core().unwrap_or(0);
    platform::pin(core).then_some(core)
}

/// Restore the affinity mask the thread had before pinning.
pub fn unpin() -> bool {
    platform::unpin()
}

/// Pins on creation, restores the previous affinity on drop, panics in
/// the measured code included.
pub struct CpuPinGuard {
    core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            core: pin_to_current_core(),
        }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.core
    }

    pub fn is_pinned(&self) -> bool {
        self.core.is_some()
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.core.is_some() {
            unpin();
        }
    }
}
