//! FFI wrapper for the C dot product kernel.
//!
//! The C sources next to this module are compiled by `build.rs` when a C
//! toolchain is present; `c_kernels_active` is set in that case. Without a
//! compiler the wrappers become panicking stubs, and the variant tables
//! skip them via [`crate::utils::C_KERNELS_AVAILABLE`].

#[cfg(c_kernels_active)]
mod ffi {
    use libc::size_t;
    use std::os::raw::c_float;

    extern "C" {
        pub fn dot_product_c(a: *const c_float, b: *const c_float, len: size_t) -> c_float;
    }
}

/// C reference kernel.
///
/// # Panics
/// Panics if the slices have different lengths.
#[cfg(c_kernels_active)]
pub fn dot_product_c_original(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "slices must have the same length");
    unsafe { ffi::dot_product_c(a.as_ptr(), b.as_ptr(), a.len()) }
}

#[cfg(not(c_kernels_active))]
pub fn dot_product_c_original(_a: &[f32], _b: &[f32]) -> f32 {
    panic!("C kernels were not compiled into this build")
}
