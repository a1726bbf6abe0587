//! # embedscope
//!
//! Semantic similarity explorer for hosted text embeddings.
//!
//! ## Overview
//!
//! This library fetches text embeddings from a hosted, OpenAI-compatible
//! provider (one request per lookup) and probes the returned vectors with a
//! small set of closed-form comparisons: cosine similarity, Euclidean
//! distance, and `A − B + C` analogy rankings. Results render as
//! fixed-width tables meant for human inspection.
//!
//! ## Core Philosophy
//!
//! - **One round trip per lookup**: no batching, caching, or retries; a
//!   provider failure is fatal for the call that raised it
//! - **Typed edge cases**: dimension mismatches, zero-norm operands, and
//!   empty candidate sets are errors, never NaN or arbitrary indices
//! - **Stateless math**: every comparison is deterministic given its inputs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use embedscope::{report, EmbeddingClient};
//!
//! #[tokio::main]
//! async fn main() -> embedscope::Result<()> {
//!     // Reads MISTRAL_API_KEY from the environment
//!     let client = EmbeddingClient::builder().build()?;
//!
//!     let source = client.embed("king").await?;
//!     let targets = client.embed_each(&["queen", "prince", "duchess"]).await?;
//!
//!     let records = report::compare_against(&source, &targets)?;
//!     print!("{}", report::comparison_table(&records));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`provider`] | Hosted embedding client and wire types |
//! | [`vector`] | Pure vector math: ops and pairwise metrics |
//! | [`analogy`] | `A − B + C` composition and dual-metric ranking |
//! | [`report`] | Comparison records and table rendering |

pub mod analogy;
pub mod error;
pub mod provider;
pub mod report;
pub mod vector;

// Re-export main types for convenience
pub use analogy::{AnalogyOutcome, Candidate, RankedCandidate};
pub use error::{Error, ErrorContext};
pub use provider::{
    Embedding, EmbeddingClient, EmbeddingClientBuilder, EmbeddingModel, EmbeddingUsage,
};
pub use report::ComparisonRecord;
pub use vector::{cosine_similarity, euclidean_distance, SimilarityMetric, Vector};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
