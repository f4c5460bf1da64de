//! Shared measurement plumbing for the kernel benchmarks.
//!
//! By default (`cpu_cycles` feature) a measurement is a raw delta of the
//! CPU cycle counter. Build with `--features use_time` or
//! `--no-default-features` to fall back to wall-clock time. Everything
//! downstream of [`to_raw`] works on plain `u64` values plus the unit name
//! from [`unit_name`], so the rest of the crate never branches on the mode.

// Use CPU cycles if: cpu_cycles is enabled AND use_time is NOT enabled.
// Use wall-clock time if: use_time is enabled OR cpu_cycles is disabled.

/// Measurement value type, cycles (u64) or Duration depending on features.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = std::time::Duration;

/// Read the current counter (cycles or time).
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Measurement {
    crate::utils::cycles::read_counter()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> std::time::Instant {
    std::time::Instant::now()
}

/// Elapsed measurement since `start`.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Measurement) -> Measurement {
    crate::utils::cycles::read_counter().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: std::time::Instant) -> Measurement {
    start.elapsed()
}

/// Collapse a measurement to a raw u64 (cycles, or nanoseconds).
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline]
pub fn to_raw(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline]
pub fn to_raw(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Name of the active measurement unit.
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

/// Render a raw measurement value for humans.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn format_measurement(raw: u64) -> String {
    format!("{} {}", raw, unit_name())
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn format_measurement(raw: u64) -> String {
    if raw < 1_000 {
        format!("{} ns", raw)
    } else if raw < 1_000_000 {
        format!("{:.2} µs", raw as f64 / 1e3)
    } else if raw < 1_000_000_000 {
        format!("{:.2} ms", raw as f64 / 1e6)
    } else {
        format!("{:.2} s", raw as f64 / 1e9)
    }
}

/// Time one expression, returning `(Measurement, value)`.
///
/// The value goes through [`std::hint::black_box`] so the optimizer cannot
/// sink the computation out of the timed region.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($e);
        ($crate::utils::bench::elapsed(start), value)
    }};
}

/// Summary statistics over raw measurement values.
#[derive(Clone, Debug, Default)]
pub struct MeasureStats {
    pub avg: f64,
    pub median: u64,
    pub min: u64,
    pub max: u64,
    pub std_dev: u64,
}

/// Fold raw samples into [`MeasureStats`]. Empty input gives all zeros.
pub fn compute_stats(raw: &[u64]) -> MeasureStats {
    if raw.is_empty() {
        return MeasureStats::default();
    }

    let mut sorted = raw.to_vec();
    sorted.sort_unstable();
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let median = sorted[sorted.len() / 2];

    let avg = raw.iter().sum::<u64>() as f64 / raw.len() as f64;
    let std_dev = if raw.len() < 2 {
        0
    } else {
        let variance = raw
            .iter()
            .map(|&n| {
                let diff = n as f64 - avg;
                diff * diff
            })
            .sum::<f64>()
            / (raw.len() - 1) as f64;
        variance.sqrt() as u64
    };

    MeasureStats {
        avg,
        median,
        min,
        max,
        std_dev,
    }
}

/// Simple fast random shuffle using Fisher-Yates.
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = SeededRng::new(seed);
    for i in (1..slice.len()).rev() {
        let j = (rng.next_u64() >> 33) as usize % (i + 1);
        slice.swap(i, j);
    }
}

/// Seed derived from the current time, for schedule randomization.
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Simple seeded LCG for reproducible benchmark inputs.
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

    /// f32 in [-1.0, 1.0)
    pub fn next_f32_range(&mut self) -> f32 {
        let n = self.next_u64();
        (n >> 40) as f32 / (1u64 << 24) as f32 * 2.0 - 1.0
    }
}
