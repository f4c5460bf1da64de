//! Randomized trials of the worker-array model against the reference.
//!
//! This mirrors how the physical array was qualified: program a random
//! matrix, stream random vectors through the array and through the
//! software reference, compare each pair of results, and fold timing and
//! error into one summary. With the model both paths run the same
//! arithmetic, so the error statistics double as a regression alarm on
//! the bank layout and the result un-reversal.

use crate::accel::{self, AccelError, WorkerArray};
use crate::math::matvec::matvec_original;
use crate::utils::bench::{self, format_measurement, unit_name};
use crate::utils::cpu_affinity::CpuPinGuard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trial dimensions and seeding.
#[derive(Clone, Debug)]
pub struct TrialOpts {
    /// Random matrices to program.
    pub n_matrices: usize,
    /// Vectors streamed per matrix.
    pub n_vectors: usize,
    pub seed: u64,
}

impl Default for TrialOpts {
    fn default() -> Self {
        Self {
            n_matrices: 1,
            n_vectors: 1,
            seed: bench::time_seed(),
        }
    }
}

/// Accumulated error and timing statistics over one trial run.
#[derive(Clone, Debug, Default)]
pub struct TrialStats {
    pub n_matrices: usize,
    pub n_vectors: usize,
    pub seed: u64,
    /// Largest Euclidean distance between array and reference results.
    pub max_err: f32,
    pub mean_err: f32,
    /// Error relative to the input vector's norm.
    pub max_rel_err: f32,
    pub mean_rel_err: f32,
    /// Raw measurement totals and maxima, array side.
    pub array_total: u64,
    pub array_max: u64,
    /// Raw measurement totals and maxima, reference side.
    pub reference_total: u64,
    pub reference_max: u64,
}

/// Random coefficient: ratio of two uniform draws with a non-zero
/// denominator. The heavy tail this produces stresses the accumulators
/// harder than a plain uniform would.
fn random_coeff(rng: &mut StdRng) -> f32 {
    let num: u32 = rng.random();
    let mut den: u32 = rng.random();
    while den == 0 {
        den = rng.random();
    }
    num as f32 / den as f32
}

fn fill_random(rng: &mut StdRng, buf: &mut [f32]) {
    for v in buf.iter_mut() {
        *v = random_coeff(rng);
    }
}

/// Euclidean distance between two equal-length vectors.
pub fn eucl_dist(x: &[f32], y: &[f32]) -> f32 {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y)
        .map(|(a, b)| {
            let d = a - b;
            d * d
        })
        .sum::<f32>()
        .sqrt()
}

/// Euclidean norm.
pub fn norm(x: &[f32]) -> f32 {
    x.iter().map(|a| a * a).sum::<f32>().sqrt()
}

/// Run the trials described by `opts` and return the folded statistics.
pub fn run_trials(opts: &TrialOpts) -> Result<TrialStats, AccelError> {
    let mut stats = TrialStats {
        n_matrices: opts.n_matrices,
        n_vectors: opts.n_vectors,
        seed: opts.seed,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(opts.seed);

    let mut mat = vec![0.0f32; accel::FLAT_LEN];
    let mut vec_in = vec![0.0f32; accel::WIDTH];
    let mut array_out = vec![0.0f32; accel::HEIGHT];
    let mut reference_out = vec![0.0f32; accel::HEIGHT];
    let mut array = WorkerArray::new();

    let _pin = CpuPinGuard::new();

    for _ in 0..opts.n_matrices {
        fill_random(&mut rng, &mut mat);
        array.program(&mat)?;

        for _ in 0..opts.n_vectors {
            fill_random(&mut rng, &mut vec_in);

            let (elapsed, result) = crate::measure!(array.compute(&vec_in, &mut array_out));
            result?;
            let array_raw = bench::to_raw(elapsed);
            stats.array_total += array_raw;
            stats.array_max = stats.array_max.max(array_raw);

            let (elapsed, _) = crate::measure!(matvec_original(&mat, &vec_in, &mut reference_out));
            let reference_raw = bench::to_raw(elapsed);
            stats.reference_total += reference_raw;
            stats.reference_max = stats.reference_max.max(reference_raw);

            let err = eucl_dist(&reference_out, &array_out);
            stats.mean_err += err;
            stats.max_err = stats.max_err.max(err);

            let rel = err / norm(&vec_in);
            stats.mean_rel_err += rel;
            stats.max_rel_err = stats.max_rel_err.max(rel);
        }
    }

    let runs = (opts.n_matrices * opts.n_vectors).max(1) as f32;
    stats.mean_err /= runs;
    stats.mean_rel_err /= runs;
    Ok(stats)
}

/// Print the trial summary, times in the active measurement unit.
pub fn print_results(stats: &TrialStats) {
    let runs = (stats.n_matrices * stats.n_vectors).max(1) as f64;
    let unit = unit_name();

    println!(
        "Trials: {} matrices x {} vectors (seed {})",
        stats.n_matrices, stats.n_vectors, stats.seed
    );
    println!(
        "Mean times: array {:.1} {unit}, reference {:.1} {unit}",
        stats.array_total as f64 / runs,
        stats.reference_total as f64 / runs
    );
    println!(
        "Max times:  array {}, reference {}",
        format_measurement(stats.array_max),
        format_measurement(stats.reference_max)
    );
    println!(
        "Absolute error: MEAN {:.9}  MAX {:.9}",
        stats.mean_err, stats.max_err
    );
    println!(
        "Relative error: MEAN {:.9} %  MAX {:.9} %",
        stats.mean_rel_err * 100.0,
        stats.max_rel_err * 100.0
    );
}
