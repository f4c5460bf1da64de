//! # Dot product kernel family
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! This is the primitive each worker of the modeled array executes over
//! its coefficient bank. The family benchmarks interchangeable
//! implementations of it at arbitrary widths; the 16-wide case is the one
//! the device actually runs.

pub mod code;
pub mod test;

pub use code::*;

use crate::registry::KernelRunner;
use crate::utils::bench::SeededRng;
use crate::utils::timer::Variant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

pub struct DotProductRunner;

impl KernelRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Worker primitive: sum of products of corresponding elements"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        let mut rng = SeededRng::new(seed);
        let a: Arc<Vec<f32>> = Arc::new((0..size).map(|_| rng.next_f32_range()).collect());
        let b: Arc<Vec<f32>> = Arc::new((0..size).map(|_| rng.next_f32_range()).collect());

        code::available_variants()
            .into_iter()
            .map(|v| {
                let a = Arc::clone(&a);
                let b = Arc::clone(&b);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) = crate::measure!(func(&a, &b));
                        (elapsed, Some(result as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), String> {
        // Non-multiple-of-4 size so the remainder paths get exercised.
        let size = 1023;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let a: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
        let b: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();

        let variants = code::available_variants();
        let reference = variants
            .iter()
            .find(|v| v.name == "original")
            .ok_or("no 'original' variant registered")?;
        let expected = (reference.function)(&a, &b);

        for variant in &variants {
            let result = (variant.function)(&a, &b);
            let diff = (result - expected).abs();

            // Accumulation order differs between variants, which moves the
            // low mantissa bits around.
            if diff > 1e-4 {
                return Err(format!(
                    "variant '{}' disagrees with original: got {}, expected {}, diff {}",
                    variant.name, result, expected, diff
                ));
            }
        }

        Ok(())
    }
}
