//! Pure vector math over provider embeddings.
//!
//! This module provides:
//! - Elementwise operations (dot product, norm, normalization, arithmetic)
//! - Pairwise metrics (cosine similarity, Euclidean distance)
//!
//! Everything here is stateless; every invocation is deterministic given its
//! inputs. Dimension mismatches and zero-norm operands surface as typed
//! errors rather than panics or NaN.

mod metrics;
mod ops;

pub use metrics::{cosine_similarity, euclidean_distance, SimilarityMetric};
pub use ops::{add, dot_product, norm, normalize, scale, subtract, Vector};
