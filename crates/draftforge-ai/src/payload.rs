//! Task payload shapes and the caller-facing result envelope.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, GenerateError};

/// Twitter thread payload. Tweets are expected to stay within 280
/// characters by contract with the model; the pipeline does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterPayload {
    pub thread: Vec<String>,
    pub hashtags: Vec<String>,
    pub engagement: String,
}

/// LinkedIn post payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedInPayload {
    pub post: String,
    pub hashtags: Vec<String>,
    pub cta: String,
}

/// Email newsletter payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailPayload {
    pub subject: String,
    pub preview: String,
    pub content: String,
    pub cta: String,
}

/// Podcast script payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodcastPayload {
    pub intro: String,
    pub outline: Vec<String>,
    pub script: String,
    pub outro: String,
    pub duration: String,
}

/// One enhanced topic suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSuggestion {
    /// Sequential 1-based id assigned by the normalizer, overwriting
    /// whatever the model produced.
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

/// Payload of a successful generation, one shape per task kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskPayload {
    Twitter(TwitterPayload),
    LinkedIn(LinkedInPayload),
    Email(EmailPayload),
    Podcast(PodcastPayload),
    Suggestions(Vec<TopicSuggestion>),
    /// Blog post or translation body, plain markdown.
    Markdown(String),
}

impl TaskPayload {
    pub fn as_markdown(&self) -> Option<&str> {
        match self {
            Self::Markdown(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_suggestions(&self) -> Option<&[TopicSuggestion]> {
        match self {
            Self::Suggestions(items) => Some(items),
            _ => None,
        }
    }
}

/// Uniform result envelope returned to callers.
///
/// `success == true` always carries a shape-complete payload; a fallback
/// payload is indistinguishable from a parsed one except via `fallback`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<TaskPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    /// True when the payload is the deterministic fallback substitute.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl GenerationResult {
    pub fn ok(payload: TaskPayload) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            error: None,
            error_kind: None,
            fallback: false,
        }
    }

    pub fn ok_fallback(payload: TaskPayload) -> Self {
        Self {
            success: true,
            payload: Some(payload),
            error: None,
            error_kind: None,
            fallback: true,
        }
    }

    pub fn unsupported_format() -> Self {
        Self {
            success: false,
            payload: None,
            error: Some("Unsupported format".to_string()),
            error_kind: None,
            fallback: false,
        }
    }
}

impl From<GenerateError> for GenerationResult {
    fn from(error: GenerateError) -> Self {
        // The unsupported-format short circuit carries no kind tag.
        if matches!(error, GenerateError::UnsupportedFormat) {
            return Self::unsupported_format();
        }
        Self {
            success: false,
            payload: None,
            error_kind: Some(error.kind()),
            error: Some(error.to_string()),
            fallback: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_carries_kind_tag() {
        let result: GenerationResult =
            GenerateError::Quota("quota exceeded".to_string()).into();
        assert!(!result.success);
        assert_eq!(result.error_kind, Some(ErrorKind::Quota));
        assert!(result.payload.is_none());
    }

    #[test]
    fn test_unsupported_format_has_no_kind() {
        let result: GenerationResult = GenerateError::UnsupportedFormat.into();
        assert_eq!(result.error.as_deref(), Some("Unsupported format"));
        assert_eq!(result.error_kind, None);
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::RateLimit).unwrap();
        assert_eq!(json, "\"rate_limit\"");
    }
}
