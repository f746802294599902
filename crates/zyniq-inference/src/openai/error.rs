//! OpenAI-specific error classification.
//!
//! Every provider failure reaches callers as `Error::ProviderUnavailable`;
//! the code only sharpens the message for logs.

use zyniq_core::Error;

/// OpenAI-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAIErrorCode {
    /// Invalid authentication credentials.
    AuthenticationError,
    /// Rate limit exceeded.
    RateLimitExceeded,
    /// Model not found or not available.
    ModelNotFound,
    /// Request too large.
    ContextLengthExceeded,
    /// Server error.
    ServerError,
    /// Unknown error.
    Unknown,
}

impl OpenAIErrorCode {
    /// Determine error code from HTTP status and error type.
    pub fn from_response(status: u16, error_type: &str) -> Self {
        match (status, error_type) {
            (401, _) => Self::AuthenticationError,
            (429, _) => Self::RateLimitExceeded,
            (404, _) | (_, "model_not_found") => Self::ModelNotFound,
            (400, _) if error_type.contains("context_length") => Self::ContextLengthExceeded,
            (500..=599, _) => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuthenticationError => "auth",
            Self::RateLimitExceeded => "rate_limit",
            Self::ModelNotFound => "model_not_found",
            Self::ContextLengthExceeded => "context_length",
            Self::ServerError => "server",
            Self::Unknown => "unknown",
        }
    }
}

/// Convert a classified provider failure into the core error.
pub fn to_provider_error(code: OpenAIErrorCode, status: u16, message: &str) -> Error {
    let label = match code {
        OpenAIErrorCode::AuthenticationError => "Authentication failed",
        OpenAIErrorCode::RateLimitExceeded => "Rate limit exceeded",
        OpenAIErrorCode::ModelNotFound => "Model not found",
        OpenAIErrorCode::ContextLengthExceeded => "Context too long",
        OpenAIErrorCode::ServerError => "Server error",
        OpenAIErrorCode::Unknown => "Provider error",
    };
    Error::ProviderUnavailable(format!("{} ({}): {}", label, status, message))
}
