//! Reference implementation of the dot product.

/// Compute the dot product of two slices.
///
/// This is the baseline every other variant, and every worker bank of the
/// array model, is checked against.
///
/// # Panics
/// Panics if the slices have different lengths.
///
/// # Example
/// ```
/// use matvec_bench::math::dot_product::dot_product_original;
///
/// let bank = [2.0, 0.5, -1.0, 4.0];
/// let vec = [10.0, 20.0, 30.0, 40.0];
/// assert_eq!(dot_product_original(&bank, &vec), 160.0);
/// ```
pub fn dot_product_original(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "slices must have the same length");

    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
