//! Embedding wire format and data structures.

use serde::{Deserialize, Serialize};

use crate::vector::Vector;

/// Request body for `POST /v1/embeddings` (OpenAI-compatible shape).
///
/// Carries exactly one input text; multi-input batching is deliberately
/// unsupported, every lookup is its own round trip.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest {
    pub model: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
}

impl EmbeddingRequest {
    pub fn new(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: text.into(),
            dimensions: None,
        }
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

/// Token usage reported by the provider for one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddingUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// A fetched embedding: the source text, its vector, and provider metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    pub text: String,
    pub vector: Vector,
    pub model: String,
    pub usage: EmbeddingUsage,
}

impl Embedding {
    pub fn new(
        text: impl Into<String>,
        vector: Vector,
        model: impl Into<String>,
        usage: EmbeddingUsage,
    ) -> Self {
        Self {
            text: text.into(),
            vector,
            model: model.into(),
            usage,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.vector.len()
    }
}

/// Provider response envelope, as decoded off the wire.
///
/// `data` tolerates being absent so that a vector-free body is reported as
/// a malformed response, not a decode failure.
#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse {
    #[serde(default)]
    pub(crate) data: Vec<WireVector>,
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) usage: EmbeddingUsage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireVector {
    pub(crate) embedding: Vec<f32>,
}

/// Static profile of a known embedding model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingModel {
    pub id: String,
    pub name: String,
    pub max_input_tokens: u32,
    pub dimensions: usize,
    pub provider: String,
}

impl EmbeddingModel {
    /// Mistral's hosted embedding model (the crate default).
    pub fn mistral_embed() -> Self {
        Self {
            id: "mistral-embed".into(),
            name: "Mistral Embed".into(),
            max_input_tokens: 8192,
            dimensions: 1024,
            provider: "mistral".into(),
        }
    }

    pub fn text_embedding_3_small() -> Self {
        Self {
            id: "text-embedding-3-small".into(),
            name: "Text Embedding 3 Small".into(),
            max_input_tokens: 8191,
            dimensions: 1536,
            provider: "openai".into(),
        }
    }
}
