//! FFI wrapper for the C matvec kernel.

#[cfg(c_kernels_active)]
mod ffi {
    use libc::size_t;
    use std::os::raw::c_float;

    extern "C" {
        pub fn matvec_c(
            mat: *const c_float,
            vec: *const c_float,
            out: *mut c_float,
            rows: size_t,
            cols: size_t,
        );
    }
}

/// C reference kernel.
///
/// # Panics
/// Panics if `mat.len() != out.len() * vec.len()`.
#[cfg(c_kernels_active)]
pub fn matvec_c_original(mat: &[f32], vec: &[f32], out: &mut [f32]) {
    assert_eq!(
        mat.len(),
        out.len() * vec.len(),
        "matrix shape must match vector and output lengths"
    );
    unsafe {
        ffi::matvec_c(
            mat.as_ptr(),
            vec.as_ptr(),
            out.as_mut_ptr(),
            out.len(),
            vec.len(),
        );
    }
}

#[cfg(not(c_kernels_active))]
pub fn matvec_c_original(_mat: &[f32], _vec: &[f32], _out: &mut [f32]) {
    panic!("C kernels were not compiled into this build")
}
