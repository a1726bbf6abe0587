//! Elementwise vector operations shared by the metrics and analogy layers.

use crate::{Error, Result};

/// An embedding vector as returned by the provider.
pub type Vector = Vec<f32>;

pub fn dot_product(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

/// L2 norm (magnitude) of a vector.
pub fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale a vector to unit length. A zero vector cannot be normalized.
pub fn normalize(v: &[f32]) -> Result<Vector> {
    let n = norm(v);
    if n == 0.0 {
        return Err(Error::ZeroNorm);
    }
    Ok(v.iter().map(|x| x / n).collect())
}

pub fn add(a: &[f32], b: &[f32]) -> Result<Vector> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x + y).collect())
}

pub fn subtract(a: &[f32], b: &[f32]) -> Result<Vector> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x - y).collect())
}

pub fn scale(v: &[f32], scalar: f32) -> Vector {
    v.iter().map(|x| x * scalar).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn dot_product_basic() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        // 1*4 + 2*5 + 3*6 = 32
        assert!(approx_eq(dot_product(&a, &b).unwrap(), 32.0));
    }

    #[test]
    fn dot_product_orthogonal() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![0.0, 1.0, 0.0];
        assert!(approx_eq(dot_product(&a, &b).unwrap(), 0.0));
    }

    #[test]
    fn dot_product_dimension_mismatch() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];
        assert!(matches!(
            dot_product(&a, &b),
            Err(Error::DimensionMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn norm_basic() {
        // sqrt(9 + 16) = 5
        assert!(approx_eq(norm(&[3.0, 4.0]), 5.0));
    }

    #[test]
    fn norm_zero_vector() {
        assert!(approx_eq(norm(&[0.0, 0.0, 0.0]), 0.0));
    }

    #[test]
    fn normalize_basic() {
        let n = normalize(&[3.0, 4.0]).unwrap();
        assert!(approx_eq(n[0], 0.6));
        assert!(approx_eq(n[1], 0.8));
        assert!(approx_eq(norm(&n), 1.0));
    }

    #[test]
    fn normalize_zero_vector_is_error() {
        assert!(matches!(normalize(&[0.0, 0.0]), Err(Error::ZeroNorm)));
    }

    #[test]
    fn add_basic() {
        let sum = add(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(sum, vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn add_dimension_mismatch() {
        assert!(add(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn subtract_basic() {
        let diff = subtract(&[5.0, 7.0, 9.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(diff, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn scale_basic() {
        assert_eq!(scale(&[1.0, 2.0, 3.0], 2.0), vec![2.0, 4.0, 6.0]);
        assert_eq!(scale(&[1.0, 2.0], -1.0), vec![-1.0, -2.0]);
    }
}
