//! # Matrix-vector kernel family
//!
//! `out[r] = Σ(mat[r][c] * vec[c])`
//!
//! Benchmarks the software kernels at square sizes and, at the 16x16
//! geometry, the worker-array model itself. For timing, the model is
//! programmed once up front and only the compute phase is sampled, which
//! is how the device is driven: program per matrix, stream many vectors.

pub mod code;
pub mod test;

pub use code::*;

use crate::accel::{self, WorkerArray};
use crate::registry::KernelRunner;
use crate::utils::bench::SeededRng;
use crate::utils::timer::Variant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

pub struct MatVecRunner;

fn checksum(out: &[f32]) -> f64 {
    out.iter().map(|&v| v as f64).sum()
}

impl KernelRunner for MatVecRunner {
    fn name(&self) -> &'static str {
        "matvec"
    }

    fn description(&self) -> &'static str {
        "Row-major matrix times vector, the operation the array accelerates"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        let mut rng = SeededRng::new(seed);
        let mat: Arc<Vec<f32>> = Arc::new((0..size * size).map(|_| rng.next_f32_range()).collect());
        let vec: Arc<Vec<f32>> = Arc::new((0..size).map(|_| rng.next_f32_range()).collect());

        let mut closures: Vec<Variant<'a>> = code::available_variants()
            .into_iter()
            .filter(|v| v.name != code::WORKER_ARRAY)
            .map(|v| {
                let mat = Arc::clone(&mat);
                let vec = Arc::clone(&vec);
                let func = v.function;
                let mut out = vec![0.0f32; size];

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, _) = crate::measure!(func(&mat, &vec, &mut out));
                        (elapsed, Some(checksum(&out)))
                    }),
                }
            })
            .collect();

        // The array model exists only at its native geometry.
        if size == accel::HEIGHT {
            let mut array = WorkerArray::new();
            if array.program(&mat).is_ok() {
                let vec = Arc::clone(&vec);
                let mut out = vec![0.0f32; accel::HEIGHT];
                closures.push(Variant {
                    name: code::WORKER_ARRAY,
                    description: "Worker-array model, compute phase only",
                    run: Box::new(move || {
                        // Shapes are fixed by construction, the Result is
                        // always Ok here.
                        let (elapsed, _) = crate::measure!(array.compute(&vec, &mut out));
                        (elapsed, Some(checksum(&out)))
                    }),
                });
            }
        }

        closures
    }

    fn verify(&self) -> Result<(), String> {
        // 16x16 covers every variant including the array model; the odd
        // shape exercises remainder handling in the row kernels.
        verify_at(accel::HEIGHT, accel::WIDTH)?;
        verify_at(7, 5)
    }
}

fn verify_at(rows: usize, cols: usize) -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(0xacce1);
    let mat: Vec<f32> = (0..rows * cols).map(|_| rng.random_range(-1.0..1.0)).collect();
    let vec: Vec<f32> = (0..cols).map(|_| rng.random_range(-1.0..1.0)).collect();

    let variants = code::available_variants();
    let reference = variants
        .iter()
        .find(|v| v.name == "original")
        .ok_or("no 'original' variant registered")?;

    let mut expected = vec![0.0f32; rows];
    (reference.function)(&mat, &vec, &mut expected);

    let mut out = vec![0.0f32; rows];
    for variant in &variants {
        if variant.name == code::WORKER_ARRAY && (rows, cols) != (accel::HEIGHT, accel::WIDTH) {
            continue;
        }

        out.fill(0.0);
        (variant.function)(&mat, &vec, &mut out);

        for (r, (got, want)) in out.iter().zip(&expected).enumerate() {
            let diff = (got - want).abs();
            if diff > 1e-4 {
                return Err(format!(
                    "variant '{}' disagrees with original at row {} ({}x{}): got {}, expected {}, diff {}",
                    variant.name, r, rows, cols, got, want, diff
                ));
            }
        }
    }

    Ok(())
}
