//! Tests for the matvec variants.

#[cfg(test)]
mod tests {
    use crate::accel::{HEIGHT, WIDTH};
    use crate::math::matvec::code::*;
    use crate::utils::{SeededRng, C_KERNELS_AVAILABLE};
    use approx::assert_abs_diff_eq;

    fn random_case(rows: usize, cols: usize, seed: u64) -> (Vec<f32>, Vec<f32>) {
        let mut rng = SeededRng::new(seed);
        let mat = (0..rows * cols).map(|_| rng.next_f32_range()).collect();
        let vec = (0..cols).map(|_| rng.next_f32_range()).collect();
        (mat, vec)
    }

    #[test]
    fn original_basic() {
        let mat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let vec = [1.0, 10.0, 100.0];
        let mut out = [0.0f32; 2];
        matvec_original(&mat, &vec, &mut out);
        assert_eq!(out, [321.0, 654.0]);
    }

    #[test]
    fn original_identity_matrix() {
        let mut mat = [0.0f32; 16];
        for i in 0..4 {
            mat[i * 4 + i] = 1.0;
        }
        let vec = [1.0, 2.0, 3.0, 4.0];
        let mut out = [0.0f32; 4];
        matvec_original(&mat, &vec, &mut out);
        assert_eq!(out, vec);
    }

    #[test]
    fn original_single_row_is_a_dot_product() {
        let mat = [2.0, 0.5, -1.0, 4.0];
        let vec = [10.0, 20.0, 30.0, 40.0];
        let mut out = [0.0f32; 1];
        matvec_original(&mat, &vec, &mut out);
        assert_eq!(out[0], 160.0);
    }

    #[test]
    fn original_empty_vector_zeroes_the_output() {
        let mat: [f32; 0] = [];
        let vec: [f32; 0] = [];
        let mut out = [7.0f32; 3];
        matvec_original(&mat, &vec, &mut out);
        assert_eq!(out, [0.0; 3]);
    }

    #[test]
    #[should_panic(expected = "matrix shape")]
    fn original_rejects_shape_mismatch() {
        let mut out = [0.0f32; 2];
        matvec_original(&[1.0; 5], &[1.0; 2], &mut out);
    }

    #[test]
    fn variants_agree_on_the_array_geometry() {
        let (mat, vec) = random_case(HEIGHT, WIDTH, 99);
        let mut expected = vec![0.0f32; HEIGHT];
        matvec_original(&mat, &vec, &mut expected);

        for variant in available_variants() {
            let mut out = vec![0.0f32; HEIGHT];
            (variant.function)(&mat, &vec, &mut out);
            for (got, want) in out.iter().zip(&expected) {
                assert_abs_diff_eq!(*got, *want, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn variants_agree_on_odd_shapes() {
        let (mat, vec) = random_case(7, 5, 1234);
        let mut expected = vec![0.0f32; 7];
        matvec_original(&mat, &vec, &mut expected);

        for variant in available_variants() {
            // The array model has a fixed geometry, skip it off 16x16.
            if variant.name == WORKER_ARRAY {
                continue;
            }
            let mut out = vec![0.0f32; 7];
            (variant.function)(&mat, &vec, &mut out);
            for (got, want) in out.iter().zip(&expected) {
                assert_abs_diff_eq!(*got, *want, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn c_kernel_matches_when_built() {
        if !C_KERNELS_AVAILABLE {
            return;
        }
        let (mat, vec) = random_case(8, 8, 5);
        let mut expected = vec![0.0f32; 8];
        matvec_original(&mat, &vec, &mut expected);

        let mut out = vec![0.0f32; 8];
        matvec_c_original(&mat, &vec, &mut out);
        // Same accumulation order on both sides.
        assert_eq!(out, expected);
    }
}
