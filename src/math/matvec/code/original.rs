//! Reference implementation of the matrix-vector product.

use crate::math::dot_product::dot_product_original;

/// Multiply a flat row-major matrix by a vector: `out[r] = mat[r] · vec`.
///
/// # Panics
/// Panics if `mat.len() != out.len() * vec.len()`.
///
/// # Example
/// ```
/// use matvec_bench::math::matvec::matvec_original;
///
/// let mat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // 2 rows of 3
/// let vec = [1.0, 10.0, 100.0];
/// let mut out = [0.0f32; 2];
/// matvec_original(&mat, &vec, &mut out);
/// assert_eq!(out, [321.0, 654.0]);
/// ```
pub fn matvec_original(mat: &[f32], vec: &[f32], out: &mut [f32]) {
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
        *y = dot_product_original(row, vec);
    }
}
