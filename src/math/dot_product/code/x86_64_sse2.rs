//! x86_64 SSE2 implementation.
//!
//! SSE2 is baseline on x86_64, so this variant needs no runtime feature
//! detection. The horizontal sum sticks to SSE2 (`movehl` plus a shuffle)
//! rather than the SSE3 `hadd`/`movehdup` family.

use std::arch::x86_64::*;

/// Compute the dot product 4 lanes at a time with 128-bit registers.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn dot_product_x86_64_sse2(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "slices must have the same length");

    let lanes = a.len() / 4 * 4;

    // SAFETY: unaligned loads stay within the first `lanes` elements of
    // both slices; SSE2 needs no feature check on this target.
    let mut sum = unsafe {
        let mut acc = _mm_setzero_ps();
        for idx in (0..lanes).step_by(4) {
            let a_vec = _mm_loadu_ps(a.as_ptr().add(idx));
            let b_vec = _mm_loadu_ps(b.as_ptr().add(idx));
            acc = _mm_add_ps(acc, _mm_mul_ps(a_vec, b_vec));
        }

        // acc = [x0, x1, x2, x3]
        let high = _mm_movehl_ps(acc, acc); // [x2, x3, _, _]
        let pairs = _mm_add_ps(acc, high); // [x0+x2, x1+x3, _, _]
        let odd = _mm_shuffle_ps(pairs, pairs, 0b01); // [x1+x3, _, _, _]
        _mm_cvtss_f32(_mm_add_ss(pairs, odd))
    };

    for idx in lanes..a.len() {
        sum += a[idx] * b[idx];
    }

    sum
}
