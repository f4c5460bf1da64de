//! Architecture-specific counter access for the `cpu_cycles` mode.

/// Read the CPU cycle counter / timer.
///
/// On x86_64 this is RDTSC fenced with LFENCE so speculation cannot move
/// work across the read. On aarch64 it is CNTVCT_EL0, a fixed-frequency
/// timer rather than true cycles, but consistent across cores and readable
/// from userspace.
#[inline(always)]
pub fn read_counter() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        read_counter_x86_64()
    }

    #[cfg(target_arch = "aarch64")]
    {
        read_counter_aarch64()
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        compile_error!(
            "cpu_cycles feature requires x86_64 or aarch64; build with --features use_time"
        );
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_counter_x86_64() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    unsafe {
        _mm_lfence();
        let cycles = _rdtsc();
        _mm_lfence();
        cycles
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_counter_aarch64() -> u64 {
    let val: u64;
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
    }
    val
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_is_roughly_monotonic() {
        let c1 = read_counter();
        let c2 = read_counter();
        let c3 = read_counter();

        // Allow tiny backward steps from TSC sync slop across cores.
        assert!(c2 >= c1 || c1 - c2 < 1000);
        assert!(c3 >= c2 || c2 - c3 < 1000);
    }

    #[test]
    fn counter_advances_over_work() {
        let start = read_counter();
        let mut sum = 0u64;
        for i in 0..100_000u64 {
            sum = std::hint::black_box(sum.wrapping_add(std::hint::black_box(i)));
        }
        let end = read_counter();
        assert!(sum > 0);
        // Low-resolution timers may tick slowly, but never backwards far.
        assert!(end >= start || start - end < 1000);
    }
}
