//! Unrolled scalar implementation.
//!
//! Four independent accumulators break the serial dependency on a single
//! sum register, letting the FPU overlap the multiplies.

/// Compute the dot product with 4x unrolling.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn dot_product_scalar_opt(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "slices must have the same length");

    let a_chunks = a.chunks_exact(4);
    let b_chunks = b.chunks_exact(4);

    let tail: f32 = a_chunks
        .remainder()
        .iter()
        .zip(b_chunks.remainder())
        .map(|(x, y)| x * y)
        .sum();

    let mut acc = [0.0f32; 4];
    for (ca, cb) in a_chunks.zip(b_chunks) {
        for lane in 0..4 {
            acc[lane] += ca[lane] * cb[lane];
        }
    }

    (acc[0] + acc[1]) + (acc[2] + acc[3]) + tail
}
