//! Tests for the dot product variants.

#[cfg(test)]
mod tests {
    use crate::math::dot_product::code::*;
    use crate::utils::{SeededRng, C_KERNELS_AVAILABLE};
    use approx::assert_abs_diff_eq;

    #[test]
    fn original_basic() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        // 1*5 + 2*6 + 3*7 + 4*8 = 70
        assert_eq!(dot_product_original(&a, &b), 70.0);
    }

    #[test]
    fn original_empty() {
        let a: [f32; 0] = [];
        assert_eq!(dot_product_original(&a, &a), 0.0);
    }

    #[test]
    fn original_single() {
        assert_eq!(dot_product_original(&[3.0], &[4.0]), 12.0);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn original_rejects_length_mismatch() {
        dot_product_original(&[1.0], &[1.0, 2.0]);
    }

    #[test]
    fn scalar_opt_handles_every_remainder() {
        for len in [0usize, 1, 2, 3, 4, 5, 7, 8, 15, 16, 33] {
            let a: Vec<f32> = (0..len).map(|i| i as f32 + 0.25).collect();
            let b: Vec<f32> = (0..len).map(|i| 2.0 - i as f32).collect();
            assert_abs_diff_eq!(
                dot_product_scalar_opt(&a, &b),
                dot_product_original(&a, &b),
                epsilon = 1e-3
            );
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn sse2_matches_original() {
        let mut rng = SeededRng::new(42);
        for len in [0usize, 1, 3, 4, 15, 16, 1023] {
            let a: Vec<f32> = (0..len).map(|_| rng.next_f32_range()).collect();
            let b: Vec<f32> = (0..len).map(|_| rng.next_f32_range()).collect();
            assert_abs_diff_eq!(
                dot_product_x86_64_sse2(&a, &b),
                dot_product_original(&a, &b),
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn c_kernel_matches_when_built() {
        if !C_KERNELS_AVAILABLE {
            return;
        }
        let mut rng = SeededRng::new(7);
        let a: Vec<f32> = (0..257).map(|_| rng.next_f32_range()).collect();
        let b: Vec<f32> = (0..257).map(|_| rng.next_f32_range()).collect();
        // Same accumulation order on both sides, no float slack needed.
        assert_eq!(dot_product_c_original(&a, &b), dot_product_original(&a, &b));
    }

    #[test]
    fn bank_fold_hits_the_worker_zero_golden_value() {
        // Worker 0's stimulus bank against the ramp, through every variant.
        let bank: Vec<f32> = crate::stimulus::window(0).iter().map(|&v| v as f32).collect();
        let ramp = crate::stimulus::ramp_f32();

        for variant in available_variants() {
            assert_eq!(
                (variant.function)(&bank, &ramp),
                -20560.0,
                "variant '{}'",
                variant.name
            );
        }
    }
}
