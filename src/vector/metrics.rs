//! Pairwise similarity and distance metrics.

use std::cmp::Ordering;
use std::fmt;

use super::ops::{dot_product, norm};
use crate::{Error, Result};

/// Cosine of the angle between two vectors, in `[-1, 1]`.
///
/// Measures directional alignment independent of magnitude. The raw quotient
/// is clamped to the Cauchy-Schwarz bound so floating-point drift on
/// near-parallel vectors cannot leak a value outside the interval.
///
/// Returns [`Error::ZeroNorm`] when either operand has zero norm; the
/// quotient is undefined there and a silent 0 would be indistinguishable
/// from genuine orthogonality.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(Error::ZeroNorm);
    }
    let dot = dot_product(a, b)?;
    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

/// Straight-line (L2) distance between two vectors.
///
/// Non-negative; zero iff the vectors are identical.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::dimension_mismatch(a.len(), b.len()));
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f32>()
        .sqrt())
}

/// The two metrics a ranking can be ordered by.
///
/// Cosine similarity ranks high-to-low (1.0 is a perfect match); Euclidean
/// distance ranks low-to-high (0.0 is a perfect match). [`rank_order`]
/// encodes that difference so callers never sort in the wrong direction.
///
/// [`rank_order`]: SimilarityMetric::rank_order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityMetric {
    Cosine,
    Euclidean,
}

impl SimilarityMetric {
    /// Score a pair of vectors under this metric.
    pub fn score(&self, a: &[f32], b: &[f32]) -> Result<f32> {
        match self {
            SimilarityMetric::Cosine => cosine_similarity(a, b),
            SimilarityMetric::Euclidean => euclidean_distance(a, b),
        }
    }

    /// Ordering that puts the better (closer) of two scores first.
    pub fn rank_order(&self, a: f32, b: f32) -> Ordering {
        match self {
            SimilarityMetric::Cosine => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            SimilarityMetric::Euclidean => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityMetric::Cosine => write!(f, "cosine similarity"),
            SimilarityMetric::Euclidean => write!(f, "euclidean distance"),
        }
    }
}
