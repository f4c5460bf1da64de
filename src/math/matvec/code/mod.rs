//! Matrix-vector product implementations.
//!
//! The full operation the array accelerates: one dot product per matrix
//! row. Matrices are flat row-major `f32` slices; shapes are implied by
//! the vector and output lengths (`out.len()` rows of `vec.len()`
//! columns) and every variant panics when `mat.len()` disagrees.

pub mod c_impl;
mod original;
mod scalar_opt;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

pub use c_impl::matvec_c_original;
pub use original::matvec_original;
pub use scalar_opt::matvec_scalar_opt;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::matvec_x86_64_sse2;

use crate::utils::{VariantInfo, C_KERNELS_AVAILABLE};

/// Name of the array-model variant; only defined at the 16x16 geometry.
pub const WORKER_ARRAY: &str = "worker-array";

/// Type alias for the matvec function signature: `(mat, vec, out)`.
pub type MatVecFn = fn(&[f32], &[f32], &mut [f32]);

/// All variants usable on the current CPU and build.
pub fn available_variants() -> Vec<VariantInfo<MatVecFn>> {
    let mut variants: Vec<VariantInfo<MatVecFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Idiomatic Rust reference (row loop)",
            function: matvec_original,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "Row loop over the unrolled dot kernel",
            function: matvec_scalar_opt,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    {
        variants.push(VariantInfo {
            name: "x86_64-sse2",
            description: "Row loop over the SSE2 dot kernel",
            function: matvec_x86_64_sse2,
        });
    }

    variants.push(VariantInfo {
        name: WORKER_ARRAY,
        description: "Worker-array model, program + compute (16x16 only)",
        function: crate::accel::matvec_worker_array,
    });

    if C_KERNELS_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C reference via FFI",
            function: matvec_c_original,
        });
    }

    variants
}
