//! Thread-to-core pinning for stable measurements.
//!
//! Linux gets the real implementation via `sched_setaffinity`; every other
//! platform gets a no-op fallback, so callers can hold a guard
//! unconditionally and only lose pinning, not portability.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    /// Pin the calling thread to `core`, saving the old mask for [`unpin`].
    pub fn pin(core: usize) -> bool {
        unsafe {
            let mut saved: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut saved) != 0
            {
                return false;
            }
            ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(saved));

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    /// Restore the affinity mask saved by the last [`pin`] on this thread.
    pub fn unpin() -> bool {
        ORIGINAL_AFFINITY.with(|cell| match cell.borrow_mut().take() {
            Some(saved) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn unpin() -> bool {
        false
    }
}

/// RAII guard that pins the current thread to the core it is already
/// running on (no forced migration) and restores the previous affinity
/// mask on drop, panics included.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        let core = platform::current_cpu().unwrap_or(0);
        Self {
            pinned_core: platform::pin(core).then_some(core),
        }
    }

    /// Core this thread is pinned to, if pinning took.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.take().is_some() {
            platform::unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_pins_and_releases() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
        }
        drop(guard);
        // A second guard must work after the first released its mask.
        let again = CpuPinGuard::new();
        assert_eq!(again.is_pinned(), again.core_id().is_some());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn pin_then_unpin_restores_mask() {
        if platform::pin(platform::current_cpu().unwrap_or(0)) {
            assert!(platform::unpin());
            // Nothing saved anymore, second unpin has nothing to restore.
            assert!(!platform::unpin());
        }
    }
}
