//! Scalar (reference) implementation of the reduction.
//!
//! One running total, elements visited left to right. This is the
//! correctness baseline the other tiers are validated against.

/// Compute the dot product of the first `n` elements of `a` and `b`.
///
/// # Arguments
/// * `a` - First sequence, length >= `n`
/// * `b` - Second sequence, length >= `n`
/// * `n` - Number of elements to reduce
///
/// # Panics
/// Panics if either slice is shorter than `n`.
///
/// # Example
/// ```
/// use vec_reduce::reduce::dot_scalar;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// let result = dot_scalar(&a, &b, 3);
/// assert!((result - 32.0).abs() < 1e-6);
/// ```
pub fn dot_scalar(a: &[f32], b: &[f32], n: usize) -> f32 {
    assert!(a.len() >= n && b.len() >= n, "n exceeds input length");

    a[..n].iter().zip(&b[..n]).map(|(x, y)| x * y).sum()
}
