//! Hosted embedding provider access.
//!
//! This module provides:
//! - [`EmbeddingClient`] for fetching vectors over HTTP (one text per call)
//! - Wire types for the OpenAI-compatible `/v1/embeddings` format
//! - Known-model profiles for presets and display
//!
//! The provider is treated as an opaque collaborator: text and a model id
//! go in, a fixed-length vector comes out. Anything beyond bearer-token
//! HTTPS transport is out of scope.

mod client;
mod types;

pub use client::{EmbeddingClient, EmbeddingClientBuilder};
pub use types::{Embedding, EmbeddingModel, EmbeddingRequest, EmbeddingUsage};
