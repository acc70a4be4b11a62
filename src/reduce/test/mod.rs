//! Tests for the reduction tiers.

#[cfg(test)]
mod tests {
    use crate::reduce::{dot_scalar, dot_unrolled, dot_vector};
    use crate::utils::bench::SeededRng;

    const EPSILON: f32 = 1e-5;

    type DotFn = fn(&[f32], &[f32], usize) -> f32;

    const TIERS: [(&str, DotFn); 3] = [
        ("scalar", dot_scalar),
        ("unrolled", dot_unrolled),
        ("vector", dot_vector),
    ];

    fn assert_close(a: f32, b: f32, msg: &str) {
        let diff = (a - b).abs();
        assert!(
            diff < EPSILON,
            "{}: expected {}, got {}, diff = {}",
            msg,
            b,
            a,
            diff
        );
    }

    #[test]
    fn test_basic_all_tiers() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        for (name, dot) in TIERS {
            assert_eq!(dot(&a, &b, 4), 70.0, "{} basic", name);
        }
    }

    #[test]
    fn test_all_ones() {
        let a = [1.0; 5];
        let b = [1.0; 5];
        for (name, dot) in TIERS {
            assert_eq!(dot(&a, &b, 5), 5.0, "{} ones", name);
        }
    }

    #[test]
    fn test_empty() {
        let a: [f32; 0] = [];
        let b: [f32; 0] = [];
        for (name, dot) in TIERS {
            assert_eq!(dot(&a, &b, 0), 0.0, "{} empty", name);
        }
    }

    #[test]
    fn test_n_zero_ignores_contents() {
        let a = [3.0, 4.0];
        let b = [5.0, 6.0];
        for (name, dot) in TIERS {
            assert_eq!(dot(&a, &b, 0), 0.0, "{} n=0", name);
        }
    }

    #[test]
    fn test_prefix_only() {
        // Only the first n elements participate.
        let a = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 100.0, 100.0];
        let b = [2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 100.0, 100.0];
        for (name, dot) in TIERS {
            assert_close(dot(&a, &b, 6), 12.0, name);
        }
    }

    #[test]
    fn test_commutative() {
        let mut rng = SeededRng::new(99);
        let a: Vec<f32> = (0..37).map(|_| rng.next_f32_range()).collect();
        let b: Vec<f32> = (0..37).map(|_| rng.next_f32_range()).collect();
        for (name, dot) in TIERS {
            // Elementwise products commute and the accumulation order is
            // identical, so this holds bit-exactly.
            assert_eq!(dot(&a, &b, 37), dot(&b, &a, 37), "{} commutative", name);
        }
    }

    #[test]
    fn test_vector_small_sizes_match_scalar_exactly() {
        // n < 4 routes the vector tier through the scalar path; results
        // must be bit-identical, not just close.
        let a = [0.1, 0.2, 0.3];
        let b = [0.4, 0.5, 0.6];
        for n in 0..4 {
            assert_eq!(dot_vector(&a, &b, n), dot_scalar(&a, &b, n), "n = {}", n);
        }
    }

    #[test]
    fn test_remainder_handling() {
        // 7 = one full group of 4 plus 3 leftovers.
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let b = [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let expected = dot_scalar(&a, &b, 7);
        assert_close(dot_unrolled(&a, &b, 7), expected, "unrolled n=7");
        assert_close(dot_vector(&a, &b, 7), expected, "vector n=7");
    }

    #[test]
    fn test_cross_tier_agreement() {
        let mut rng = SeededRng::new(0x5eed);
        let size = 1023;
        let a: Vec<f32> = (0..size).map(|_| rng.next_f32_range()).collect();
        let b: Vec<f32> = (0..size).map(|_| rng.next_f32_range()).collect();

        let baseline = dot_scalar(&a, &b, size);
        for (name, dot) in TIERS {
            let diff = (dot(&a, &b, size) - baseline).abs();
            assert!(diff < 1e-4, "{} diverged from baseline by {}", name, diff);
        }
    }

    #[test]
    fn test_permutation_invariance_scalar() {
        let mut rng = SeededRng::new(0xabc);
        let size = 256;
        let a: Vec<f32> = (0..size).map(|_| rng.next_f32_range()).collect();
        let b: Vec<f32> = (0..size).map(|_| rng.next_f32_range()).collect();

        let forward = dot_scalar(&a, &b, size);

        // Reorder both sequences identically; only rounding may change.
        let ra: Vec<f32> = a.iter().rev().copied().collect();
        let rb: Vec<f32> = b.iter().rev().copied().collect();
        let reversed = dot_scalar(&ra, &rb, size);

        assert!(
            (forward - reversed).abs() < 1e-4,
            "permutation changed the result: {} vs {}",
            forward,
            reversed
        );
    }

    #[test]
    fn test_nan_propagates() {
        for (name, dot) in TIERS {
            // Tail position (exercises the remainder path for n >= 4)
            let a = [1.0, 2.0, 3.0, 4.0, f32::NAN];
            let b = [1.0; 5];
            assert!(dot(&a, &b, 5).is_nan(), "{} NaN in tail", name);

            // Inside a full group of four (exercises the lane path)
            let a = [1.0, f32::NAN, 3.0, 4.0, 5.0];
            let b = [1.0; 5];
            assert!(dot(&a, &b, 5).is_nan(), "{} NaN in vector body", name);

            // Short input (scalar fallback path)
            let a = [f32::NAN, 1.0];
            let b = [1.0, 1.0];
            assert!(dot(&a, &b, 2).is_nan(), "{} NaN in short input", name);
        }
    }

    #[test]
    fn test_infinity_propagates() {
        let a = [f32::INFINITY, 1.0, 1.0, 1.0];
        let b = [1.0; 4];
        for (name, dot) in TIERS {
            assert_eq!(dot(&a, &b, 4), f32::INFINITY, "{} infinity", name);
        }
    }

    #[test]
    #[should_panic(expected = "n exceeds input length")]
    fn test_scalar_length_precondition() {
        let a = [1.0, 2.0];
        let b = [1.0, 2.0];
        dot_scalar(&a, &b, 3);
    }

    #[test]
    #[should_panic(expected = "n exceeds input length")]
    fn test_unrolled_length_precondition() {
        let a = [1.0, 2.0];
        let b = [1.0, 2.0];
        dot_unrolled(&a, &b, 3);
    }

    #[test]
    #[should_panic(expected = "n exceeds input length")]
    fn test_vector_length_precondition() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [1.0, 2.0, 3.0];
        dot_vector(&a, &b, 4);
    }
}
