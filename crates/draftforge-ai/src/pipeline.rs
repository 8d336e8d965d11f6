//! Generation pipeline dispatcher.
//!
//! Routes a request through prompt construction, one provider call and
//! response normalization, and returns the uniform [`GenerationResult`]
//! envelope. Requests are independent: the generator holds no per-request
//! state and callers may run any number of generations concurrently.

use std::sync::Arc;

use serde_json::Value;

use crate::classify::{ErrorClassifier, SubstringClassifier};
use crate::error::{ErrorKind, GenerateError};
use crate::normalize::normalize;
use crate::payload::GenerationResult;
use crate::prompt::build_prompt;
use crate::provider::CompletionProvider;
use crate::task::{
    BlogOptions, EnhanceOptions, GenerationRequest, GenerationTask, TranslateOptions,
};

/// The generation pipeline entry point.
pub struct Generator {
    provider: Arc<dyn CompletionProvider>,
    classifier: Arc<dyn ErrorClassifier>,
    default_api_key: Option<String>,
}

impl Generator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            classifier: Arc::new(SubstringClassifier),
            default_api_key: None,
        }
    }

    /// Process-wide key used when a request carries none.
    pub fn with_default_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.default_api_key = Some(api_key.into());
        self
    }

    /// Swap the provider error classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn ErrorClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Run one generation request end to end.
    pub async fn generate(&self, request: GenerationRequest) -> GenerationResult {
        let api_key = match request
            .api_key
            .as_deref()
            .or(self.default_api_key.as_deref())
        {
            Some(key) if !key.is_empty() => key,
            _ => {
                return GenerateError::Auth(
                    "no API key provided and no default configured".to_string(),
                )
                .into();
            }
        };

        let prompt = build_prompt(&request.task, &request.source_content);
        tracing::debug!(
            task = request.task.kind(),
            provider = self.provider.name(),
            model = self.provider.model(),
            prompt_len = prompt.len(),
            "dispatching generation request"
        );

        match self.provider.complete(&prompt, api_key).await {
            Ok(raw) => {
                let normalized = normalize(&request.task, &raw, &request.source_content);
                if normalized.fallback {
                    GenerationResult::ok_fallback(normalized.payload)
                } else {
                    GenerationResult::ok(normalized.payload)
                }
            }
            Err(error) => self.classified(error).into(),
        }
    }

    /// Generate a blog post for a topic.
    pub async fn generate_blog(
        &self,
        topic: &str,
        options: BlogOptions,
        api_key: Option<String>,
    ) -> GenerationResult {
        self.generate(GenerationRequest {
            task: GenerationTask::BlogPost(options),
            source_content: topic.to_string(),
            api_key,
        })
        .await
    }

    /// Translate existing content, preserving its markdown structure.
    pub async fn translate(
        &self,
        content: &str,
        options: TranslateOptions,
        api_key: Option<String>,
    ) -> GenerationResult {
        self.generate(GenerationRequest {
            task: GenerationTask::Translation(options),
            source_content: content.to_string(),
            api_key,
        })
        .await
    }

    /// Produce five enhanced versions of a topic.
    pub async fn enhance_topic(
        &self,
        topic: &str,
        options: EnhanceOptions,
        api_key: Option<String>,
    ) -> GenerationResult {
        self.generate(GenerationRequest {
            task: GenerationTask::TopicEnhancement(options),
            source_content: topic.to_string(),
            api_key,
        })
        .await
    }

    /// Repurpose blog content into a social format, keyed by a string
    /// discriminator. Unrecognized formats short-circuit with no provider
    /// call; malformed options fall back to that format's defaults.
    pub async fn repurpose(
        &self,
        content: &str,
        format: &str,
        options: Value,
        api_key: Option<String>,
    ) -> GenerationResult {
        let Some(task) = repurposing_task(format, options) else {
            return GenerationResult::unsupported_format();
        };
        self.generate(GenerationRequest {
            task,
            source_content: content.to_string(),
            api_key,
        })
        .await
    }

    /// Re-tag unclassified provider failures using the classifier table.
    fn classified(&self, error: GenerateError) -> GenerateError {
        match error {
            GenerateError::Provider(message) => match self.classifier.classify(&message) {
                ErrorKind::Auth => GenerateError::Auth(message),
                ErrorKind::Quota => GenerateError::Quota(message),
                ErrorKind::RateLimit => GenerateError::RateLimit(message),
                ErrorKind::Model => GenerateError::Model(message),
                _ => GenerateError::Provider(message),
            },
            other => other,
        }
    }
}

fn repurposing_task(format: &str, options: Value) -> Option<GenerationTask> {
    let task = match format {
        "twitter" => {
            GenerationTask::TwitterThread(serde_json::from_value(options).unwrap_or_default())
        }
        "linkedin" => {
            GenerationTask::LinkedInPost(serde_json::from_value(options).unwrap_or_default())
        }
        "email" => {
            GenerationTask::EmailNewsletter(serde_json::from_value(options).unwrap_or_default())
        }
        "podcast" => {
            GenerationTask::PodcastScript(serde_json::from_value(options).unwrap_or_default())
        }
        _ => return None,
    };
    Some(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::TaskPayload;
    use crate::provider::{MockProvider, MockReply};
    use serde_json::json;

    fn generator(provider: &MockProvider) -> Generator {
        Generator::new(Arc::new(provider.clone())).with_default_api_key("test-key")
    }

    #[tokio::test]
    async fn test_blog_generation_returns_markdown() {
        let provider = MockProvider::replying(MockReply::text("# Rust\n\nA fine language."));
        let result = generator(&provider)
            .generate_blog("Rust", BlogOptions::default(), None)
            .await;
        assert!(result.success);
        assert!(!result.fallback);
        assert_eq!(
            result.payload.unwrap().as_markdown(),
            Some("# Rust\n\nA fine language.")
        );
    }

    #[tokio::test]
    async fn test_repurpose_twitter_parses_json_payload() {
        let provider = MockProvider::replying(MockReply::text(
            r#"{"thread": ["1/1 tweet"], "hashtags": ["rust"], "engagement": "ask"}"#,
        ));
        let result = generator(&provider)
            .repurpose("# Post", "twitter", json!({"style": "tips"}), None)
            .await;
        assert!(result.success);
        match result.payload.unwrap() {
            TaskPayload::Twitter(payload) => assert_eq!(payload.thread, vec!["1/1 tweet"]),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_reply_is_success_with_fallback() {
        let provider = MockProvider::replying(MockReply::text("not json at all"));
        let result = generator(&provider)
            .repurpose("# Post", "linkedin", json!({}), None)
            .await;
        assert!(result.success);
        assert!(result.fallback);
        assert!(matches!(
            result.payload,
            Some(TaskPayload::LinkedIn(_))
        ));
    }

    #[tokio::test]
    async fn test_unsupported_format_short_circuits() {
        let provider = MockProvider::new();
        let result = generator(&provider)
            .repurpose("# Post", "instagram", json!({}), None)
            .await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Unsupported format"));
        assert_eq!(result.error_kind, None);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_error_classification() {
        for (message, expected) in [
            ("quota exceeded for project", ErrorKind::Quota),
            ("request was unauthorized", ErrorKind::Auth),
            ("rate limit hit, retry later", ErrorKind::RateLimit),
            ("the model is overloaded", ErrorKind::Model),
            ("flux capacitor misaligned", ErrorKind::Unknown),
        ] {
            let provider = MockProvider::replying(MockReply::error(message));
            let result = generator(&provider)
                .generate_blog("Rust", BlogOptions::default(), None)
                .await;
            assert!(!result.success, "message: {message}");
            assert_eq!(result.error_kind, Some(expected), "message: {message}");
            assert!(result.payload.is_none());
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_is_terminal_auth_error() {
        let provider = MockProvider::new();
        let result = Generator::new(Arc::new(provider.clone()))
            .generate_blog("Rust", BlogOptions::default(), None)
            .await;
        assert!(!result.success);
        assert_eq!(result.error_kind, Some(ErrorKind::Auth));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_per_call_key_overrides_default() {
        let provider = MockProvider::replying(MockReply::text("# ok"));
        generator(&provider)
            .generate_blog("Rust", BlogOptions::default(), Some("call-key".to_string()))
            .await;
        let requests = provider.requests().await;
        assert_eq!(requests[0].1, "call-key");
    }

    #[tokio::test]
    async fn test_enhancement_reply_gets_sequential_ids() {
        let provider = MockProvider::replying(MockReply::text(
            r#"```json
            [
                {"title": "A", "id": "7", "score": 90},
                {"title": "B"},
                {"title": "C"}
            ]
            ```"#,
        ));
        let result = generator(&provider)
            .enhance_topic("Rust", EnhanceOptions::default(), None)
            .await;
        assert!(result.success);
        assert!(!result.fallback);
        let payload = result.payload.unwrap();
        let suggestions = payload.as_suggestions().unwrap();
        let ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn test_malformed_options_fall_back_to_defaults() {
        let provider = MockProvider::replying(MockReply::text("oops"));
        // Options that cannot deserialize (wrong type) degrade to defaults
        // rather than failing the request.
        let result = generator(&provider)
            .repurpose("# Post", "podcast", json!({"style": 42}), None)
            .await;
        assert!(result.success);
        assert!(result.fallback);
        match result.payload.unwrap() {
            TaskPayload::Podcast(payload) => {
                assert!(payload.intro.contains("I'm Alex"))
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_independent() {
        let provider = MockProvider::from_replies(vec![
            MockReply::text("# one"),
            MockReply::text("# two"),
        ]);
        let generator = generator(&provider);
        let (a, b) = tokio::join!(
            generator.generate_blog("One", BlogOptions::default(), None),
            generator.generate_blog("Two", BlogOptions::default(), None),
        );
        assert!(a.success && b.success);
        assert_eq!(provider.call_count(), 2);
    }
}
