//! Embedding client for fetching vectors from a hosted provider.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use super::types::{Embedding, EmbeddingModel, EmbeddingRequest, WireResponse};
use crate::{Error, ErrorContext, Result};

const DEFAULT_BASE_URL: &str = "https://api.mistral.ai";
const API_KEY_ENV: &str = "MISTRAL_API_KEY";

/// Client for a hosted OpenAI-compatible `/v1/embeddings` endpoint.
///
/// Every lookup is a single request/response round trip: no batching, no
/// caching, no retries. Provider failures are fatal for the call that
/// raised them. The inner `reqwest::Client` is the only shared resource
/// and is read-only after construction.
#[derive(Debug)]
pub struct EmbeddingClient {
    http_client: reqwest::Client,
    model: String,
    base_url: String,
    api_key: String,
    output_dimensions: Option<usize>,
}

impl EmbeddingClient {
    pub fn builder() -> EmbeddingClientBuilder {
        EmbeddingClientBuilder::new()
    }

    /// Fetch the embedding vector for one text.
    pub async fn embed(&self, text: &str) -> Result<Embedding> {
        let mut request = EmbeddingRequest::new(&self.model, text);
        if let Some(dims) = self.output_dimensions {
            request = request.with_dimensions(dims);
        }
        let request_id = Uuid::new_v4().to_string();
        let endpoint = format!("{}/v1/embeddings", self.base_url);

        let start = Instant::now();
        let response = self
            .http_client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                Error::network_with_context(
                    format!("Embedding request failed: {}", e),
                    ErrorContext::new().with_source("provider"),
                )
            })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("Failed to read embedding response: {}", e)))?;
        if !status.is_success() {
            return Err(Error::provider(status.as_u16(), body));
        }

        let decoded: WireResponse = serde_json::from_str(&body)?;
        if decoded.data.len() > 1 {
            warn!(
                request_id = request_id.as_str(),
                count = decoded.data.len(),
                "provider returned multiple embeddings for a single input; keeping the first"
            );
        }
        let vector = decoded
            .data
            .into_iter()
            .next()
            .map(|v| v.embedding)
            .ok_or_else(|| {
                Error::parsing_with_context(
                    "Response contained no embedding",
                    ErrorContext::new()
                        .with_source("provider")
                        .with_details(format!("model: {}", self.model)),
                )
            })?;
        if vector.is_empty() {
            return Err(Error::parsing("Provider returned an empty embedding vector"));
        }

        let model = decoded.model.unwrap_or_else(|| self.model.clone());
        debug!(
            request_id = request_id.as_str(),
            model = model.as_str(),
            dimensions = vector.len(),
            prompt_tokens = decoded.usage.prompt_tokens,
            duration_ms = start.elapsed().as_millis() as u64,
            "embedding fetched"
        );
        Ok(Embedding::new(text, vector, model, decoded.usage))
    }

    /// Fetch embeddings for several texts, one request at a time.
    ///
    /// Lookups are strictly sequential: each response is awaited before the
    /// next request is sent, and the first failure aborts the remainder.
    /// Results come back in input order. This is per-text iteration, not
    /// multi-input batching.
    pub async fn embed_each(&self, texts: &[impl AsRef<str>]) -> Result<Vec<Embedding>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed(text.as_ref()).await?);
        }
        Ok(embeddings)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Builder for [`EmbeddingClient`].
///
/// Only the API key has no default: it must be set explicitly or through
/// the `MISTRAL_API_KEY` environment variable.
pub struct EmbeddingClientBuilder {
    model: Option<String>,
    api_key: Option<String>,
    base_url: Option<String>,
    output_dimensions: Option<usize>,
    timeout_secs: u64,
}

impl EmbeddingClientBuilder {
    pub fn new() -> Self {
        Self {
            model: None,
            api_key: None,
            base_url: None,
            output_dimensions: None,
            timeout_secs: 60,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Ask the provider for a reduced output dimensionality. Only honored
    /// by models that support the `dimensions` request parameter.
    pub fn output_dimensions(mut self, dimensions: usize) -> Self {
        self.output_dimensions = Some(dimensions);
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<EmbeddingClient> {
        let model = self
            .model
            .unwrap_or_else(|| EmbeddingModel::mistral_embed().id);
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .ok_or_else(|| {
                Error::configuration(format!("API key required (set {})", API_KEY_ENV))
            })?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed = Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("builder.base_url")
                    .with_details(base_url.clone()),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("Base URL must be http or https, got '{}'", parsed.scheme()),
                ErrorContext::new().with_field_path("builder.base_url"),
            ));
        }
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        let base_url = base_url.trim_end_matches('/').to_string();
        info!(
            model = model.as_str(),
            base_url = base_url.as_str(),
            timeout_secs = self.timeout_secs,
            "embedding client configured"
        );
        Ok(EmbeddingClient {
            http_client,
            model,
            base_url,
            api_key,
            output_dimensions: self.output_dimensions,
        })
    }
}

impl Default for EmbeddingClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
