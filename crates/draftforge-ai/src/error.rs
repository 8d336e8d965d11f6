//! Error types for the generation pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-checkable classification of a failed generation attempt.
///
/// `Parse` never reaches callers through [`crate::GenerationResult`]: parse
/// failures are absorbed by the normalizer's fallback path. It exists so the
/// classifier vocabulary covers every failure the pipeline can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Auth,
    Quota,
    RateLimit,
    Model,
    Network,
    Parse,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Quota => "quota",
            Self::RateLimit => "rate_limit",
            Self::Model => "model",
            Self::Network => "network",
            Self::Parse => "parse",
            Self::Unknown => "unknown",
        }
    }
}

/// Generation pipeline error types
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid or missing API key: {0}")]
    Auth(String),

    #[error("Provider quota exceeded: {0}")]
    Quota(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Model not available: {0}")]
    Model(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Unsupported format")]
    UnsupportedFormat,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenerateError {
    /// The classification tag surfaced to callers alongside the message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth(_) => ErrorKind::Auth,
            Self::Quota(_) => ErrorKind::Quota,
            Self::RateLimit(_) => ErrorKind::RateLimit,
            Self::Model(_) => ErrorKind::Model,
            Self::Http(_) => ErrorKind::Network,
            Self::Json(_) => ErrorKind::Parse,
            Self::Provider(_) | Self::UnsupportedFormat => ErrorKind::Unknown,
        }
    }
}

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, GenerateError>;
