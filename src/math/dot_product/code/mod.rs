//! Dot product implementations.
//!
//! The dot product is the worker primitive of the modeled array: each
//! worker folds its 16-coefficient bank with the broadcast input vector.
//! Every variant here computes `dot(a, b) = Σ(a[i] * b[i])` over `f32`
//! slices and panics on length mismatch.

pub mod c_impl;
mod original;
mod scalar_opt;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

pub use c_impl::dot_product_c_original;
pub use original::dot_product_original;
pub use scalar_opt::dot_product_scalar_opt;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::dot_product_x86_64_sse2;

use crate::utils::{VariantInfo, C_KERNELS_AVAILABLE};

/// Type alias for the dot product function signature.
pub type DotProductFn = fn(&[f32], &[f32]) -> f32;

/// All variants usable on the current CPU and build.
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    let mut variants: Vec<VariantInfo<DotProductFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Idiomatic Rust reference (iterator fold)",
            function: dot_product_original,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "Four-accumulator unrolled scalar",
            function: dot_product_scalar_opt,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    {
        variants.push(VariantInfo {
            name: "x86_64-sse2",
            description: "SSE2 intrinsics, 4 lanes per step",
            function: dot_product_x86_64_sse2,
        });
    }

    if C_KERNELS_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C reference via FFI",
            function: dot_product_c_original,
        });
    }

    variants
}
