use thiserror::Error;

/// Structured error context for better error reporting and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "builder.base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected shape, offending value)
    pub details: Option<String>,
    /// Source of the error (e.g., "provider", "analogy")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for embedscope.
///
/// Provider-side failures (`Network`, `Provider`, `Parsing`) are fatal for
/// the call that raised them; there is no retry layer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {message}{}", format_context(.context))]
    Network {
        message: String,
        context: ErrorContext,
    },

    #[error("Provider error: HTTP {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Malformed provider response: {message}{}", format_context(.context))]
    Parsing {
        message: String,
        context: ErrorContext,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Vector dimensions must match: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Zero-norm vector: cosine similarity is undefined")]
    ZeroNorm,

    #[error("Candidate set is empty")]
    EmptyCandidates,
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new network error with structured context
    pub fn network_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Network {
            message: msg.into(),
            context,
        }
    }

    /// Create a new provider error from an HTTP status and response body
    pub fn provider(status: u16, msg: impl Into<String>) -> Self {
        Error::Provider {
            status,
            message: msg.into(),
        }
    }

    /// Create a new parsing error
    pub fn parsing(msg: impl Into<String>) -> Self {
        Error::Parsing {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new parsing error with structured context
    pub fn parsing_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Parsing {
            message: msg.into(),
            context,
        }
    }

    /// Create a dimension-mismatch error from two operand lengths
    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        Error::DimensionMismatch { left, right }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Network { context, .. }
            | Error::Parsing { context, .. } => Some(context),
            _ => None,
        }
    }
}
