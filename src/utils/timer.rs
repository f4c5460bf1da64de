//! Shuffled-schedule measurement of kernel variants.
//!
//! One timing path for every kernel family: warm all variants up, then run
//! the (variant, sample) pairs in random order so cache state and frequency
//! drift spread across variants instead of biasing whichever ran last. Raw
//! samples are folded into [`MeasureStats`] per variant.

use std::hint::black_box;

use super::bench::{compute_stats, shuffle, time_seed, to_raw, MeasureStats, Measurement};
use super::cpu_affinity::CpuPinGuard;

/// When to hold the core pin around measurements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// One pin held across the whole schedule (least overhead).
    Global,
    /// Pin around each sample; dodges migration at the cost of syscalls.
    #[default]
    PerSample,
}

#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Samples collected per variant.
    pub samples: usize,
    /// Warmup calls per variant before sampling starts.
    pub warmup: usize,
    pub pin_strategy: PinStrategy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            samples: 30,
            warmup: 10,
            pin_strategy: PinStrategy::default(),
        }
    }
}

/// A variant to be measured.
///
/// The closure performs one run and reports its own [`Measurement`] (use
/// the [`measure!`](crate::measure) macro in the body) so no dispatch
/// overhead lands inside the timed region. The `f64` is a sample of the
/// kernel's output, used for the cross-variant result column.
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
    pub stats: MeasureStats,
    /// Samples actually collected.
    pub samples: usize,
    /// Last observed output value, if the variant reports one.
    pub result_sample: Option<f64>,
}

/// Measure all `variants` under `config` and return per-variant statistics,
/// in the order the variants were given.
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    for variant in &mut variants {
        for _ in 0..config.warmup {
            black_box((variant.run)());
        }
    }

    let mut schedule: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(config.samples))
        .collect();
    shuffle(&mut schedule, time_seed());

    let mut raw: Vec<Vec<u64>> = (0..variants.len())
        .map(|_| Vec::with_capacity(config.samples))
        .collect();
    let mut outputs: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for idx in schedule {
        let _pin = (config.pin_strategy == PinStrategy::PerSample).then(CpuPinGuard::new);
        let (elapsed, output) = (variants[idx].run)();
        raw[idx].push(to_raw(elapsed));
        if output.is_some() {
            outputs[idx] = output;
        }
    }

    variants
        .iter()
        .enumerate()
        .map(|(idx, variant)| VariantResult {
            name: variant.name.to_string(),
            description: variant.description.to_string(),
            stats: compute_stats(&raw[idx]),
            samples: raw[idx].len(),
            result_sample: outputs[idx],
        })
        .collect()
}
