//! x86_64 SSE2 implementation.

use crate::math::dot_product::dot_product_x86_64_sse2;

/// Row loop over the SSE2 dot kernel.
///
/// # Panics
/// Panics if `mat.len() != out.len() * vec.len()`.
pub fn matvec_x86_64_sse2(mat: &[f32], vec: &[f32], out: &mut [f32]) {
    assert_eq!(
        mat.len(),
        out.len() * vec.len(),
        "matrix shape must match vector and output lengths"
    );
    if vec.is_empty() {
        out.fill(0.0);
        return;
    }

    for (row, y) in mat.chunks_exact(vec.len()).zip(out.iter_mut()) {
        *y = dot_product_x86_64_sse2(row, vec);
    }
}
