//! Shared benchmarking and output infrastructure.

pub mod bench;
pub mod cpu_affinity;
pub mod csv;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

pub use bench::{compute_stats, shuffle, time_seed, MeasureStats, SeededRng};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{measure_variants, TimingConfig, Variant, VariantResult};

/// C compiler name detected at build time.
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Whether the C kernel variants were compiled into this build.
#[cfg(c_kernels_active)]
pub const C_KERNELS_AVAILABLE: bool = true;
#[cfg(not(c_kernels_active))]
pub const C_KERNELS_AVAILABLE: bool = false;

/// One implementation variant of a kernel, generic over its function type.
pub struct VariantInfo<F> {
    /// Table name (e.g. "original", "x86_64-sse2").
    pub name: &'static str,
    pub description: &'static str,
    pub function: F,
}
