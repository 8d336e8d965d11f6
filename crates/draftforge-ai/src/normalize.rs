//! Response normalization.
//!
//! Converts raw completion text into a validated [`TaskPayload`], or
//! substitutes the task's deterministic fallback. This stage never fails:
//! parse and shape problems are absorbed into the fallback path, so only
//! provider errors can surface to callers as `success: false`.

use serde_json::Value;

use crate::fallback::fallback_payload;
use crate::payload::{
    EmailPayload, LinkedInPayload, PodcastPayload, TaskPayload, TopicSuggestion, TwitterPayload,
};
use crate::task::GenerationTask;

/// Normalized payload plus whether the fallback substitute was used.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub payload: TaskPayload,
    pub fallback: bool,
}

/// Strip a wrapping fenced code block (with or without a language tag),
/// preserving the inner content verbatim.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag following the opening fence, e.g. ```json.
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    let rest = rest.trim();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Normalize raw completion text for a task.
///
/// `source_content` is the original request input, needed to parameterize
/// fallback templates (e.g. the topic name in enhancement suggestions).
pub fn normalize(task: &GenerationTask, raw: &str, source_content: &str) -> Normalized {
    let cleaned = strip_code_fence(raw);

    if !task.expects_json() {
        // Markdown-shaped tasks: the stripped text itself is the payload.
        return Normalized {
            payload: TaskPayload::Markdown(cleaned.to_string()),
            fallback: false,
        };
    }

    match parse_json_payload(task, cleaned) {
        Ok(payload) => Normalized {
            payload,
            fallback: false,
        },
        Err(reason) => {
            tracing::warn!(
                task = task.kind(),
                %reason,
                "provider response failed to parse, substituting fallback payload"
            );
            Normalized {
                payload: fallback_payload(task, source_content),
                fallback: true,
            }
        }
    }
}

fn parse_json_payload(task: &GenerationTask, cleaned: &str) -> Result<TaskPayload, String> {
    match task {
        GenerationTask::TwitterThread(_) => serde_json::from_str::<TwitterPayload>(cleaned)
            .map(TaskPayload::Twitter)
            .map_err(|e| e.to_string()),
        GenerationTask::LinkedInPost(_) => serde_json::from_str::<LinkedInPayload>(cleaned)
            .map(TaskPayload::LinkedIn)
            .map_err(|e| e.to_string()),
        GenerationTask::EmailNewsletter(_) => serde_json::from_str::<EmailPayload>(cleaned)
            .map(TaskPayload::Email)
            .map_err(|e| e.to_string()),
        GenerationTask::PodcastScript(_) => serde_json::from_str::<PodcastPayload>(cleaned)
            .map(TaskPayload::Podcast)
            .map_err(|e| e.to_string()),
        GenerationTask::TopicEnhancement(_) => parse_suggestions(cleaned),
        GenerationTask::BlogPost(_) | GenerationTask::Translation(_) => {
            unreachable!("markdown-shaped tasks are not JSON parsed")
        }
    }
}

fn parse_suggestions(cleaned: &str) -> Result<TaskPayload, String> {
    let value: Value = serde_json::from_str(cleaned).map_err(|e| e.to_string())?;
    if !value.is_array() {
        return Err("response is not an array".to_string());
    }
    let mut suggestions: Vec<TopicSuggestion> =
        serde_json::from_value(value).map_err(|e| e.to_string())?;

    // Sequential 1-based ids, overwriting whatever the model produced.
    for (index, suggestion) in suggestions.iter_mut().enumerate() {
        suggestion.id = (index + 1).to_string();
    }
    Ok(TaskPayload::Suggestions(suggestions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{
        BlogOptions, EmailOptions, EnhanceOptions, LinkedInOptions, PodcastOptions,
        TwitterOptions,
    };

    fn twitter_task() -> GenerationTask {
        GenerationTask::TwitterThread(TwitterOptions::default())
    }

    const TWITTER_JSON: &str = r#"{
        "thread": ["1/2 Hook tweet", "2/2 Closing tweet"],
        "hashtags": ["rust", "ai"],
        "engagement": "Reply with your take"
    }"#;

    #[test]
    fn test_valid_json_parses() {
        let normalized = normalize(&twitter_task(), TWITTER_JSON, "post");
        assert!(!normalized.fallback);
        match normalized.payload {
            TaskPayload::Twitter(payload) => {
                assert_eq!(payload.thread.len(), 2);
                assert_eq!(payload.hashtags, vec!["rust", "ai"]);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_fenced_json_parses_identically() {
        let bare = normalize(&twitter_task(), TWITTER_JSON, "post");
        let fenced = normalize(
            &twitter_task(),
            &format!("```json\n{TWITTER_JSON}\n```"),
            "post",
        );
        let fenced_untagged = normalize(
            &twitter_task(),
            &format!("```\n{TWITTER_JSON}\n```"),
            "post",
        );
        assert_eq!(bare.payload, fenced.payload);
        assert_eq!(bare.payload, fenced_untagged.payload);
        assert!(!fenced.fallback);
    }

    #[test]
    fn test_valid_email_json_parses() {
        let task = GenerationTask::EmailNewsletter(EmailOptions::default());
        let raw = r#"{
            "subject": "This week in Rust",
            "preview": "Highlights inside...",
            "content": "<h1>Newsletter</h1><p>Body</p>",
            "cta": "Read more"
        }"#;
        let normalized = normalize(&task, raw, "post");
        assert!(!normalized.fallback);
        match normalized.payload {
            TaskPayload::Email(payload) => {
                assert_eq!(payload.subject, "This week in Rust");
                assert_eq!(payload.cta, "Read more");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_valid_podcast_json_parses() {
        let task = GenerationTask::PodcastScript(PodcastOptions::default());
        let raw = r#"{
            "intro": "Welcome to the show",
            "outline": ["Point one", "Point two"],
            "script": "[00:00] Welcome everyone",
            "outro": "Thanks for listening",
            "duration": "12 minutes"
        }"#;
        let normalized = normalize(&task, raw, "post");
        assert!(!normalized.fallback);
        match normalized.payload {
            TaskPayload::Podcast(payload) => {
                assert_eq!(payload.outline.len(), 2);
                assert_eq!(payload.duration, "12 minutes");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_email_substitutes_fallback() {
        // "content" and "cta" absent: shape validation must reject it.
        let task = GenerationTask::EmailNewsletter(EmailOptions::default());
        let partial = r#"{"subject": "Hi", "preview": "..."}"#;
        let normalized = normalize(&task, partial, "post");
        assert!(normalized.fallback);
        match normalized.payload {
            TaskPayload::Email(payload) => {
                assert!(payload.content.contains("Weekly Insights Newsletter"))
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_substitutes_fallback() {
        let normalized = normalize(&twitter_task(), "Sorry, I can't do that {", "post");
        assert!(normalized.fallback);
        match normalized.payload {
            TaskPayload::Twitter(payload) => assert_eq!(payload.thread.len(), 5),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_missing_required_key_substitutes_fallback() {
        // "engagement" absent: shape validation must reject it.
        let partial = r#"{"thread": ["one"], "hashtags": []}"#;
        let normalized = normalize(&twitter_task(), partial, "post");
        assert!(normalized.fallback);
    }

    #[test]
    fn test_markdown_task_skips_parsing() {
        let task = GenerationTask::BlogPost(BlogOptions::default());
        let normalized = normalize(&task, "```\n# Title\n\nBody text.\n```", "topic");
        assert!(!normalized.fallback);
        assert_eq!(
            normalized.payload.as_markdown(),
            Some("# Title\n\nBody text.")
        );
    }

    #[test]
    fn test_suggestion_ids_are_reassigned_in_order() {
        let task = GenerationTask::TopicEnhancement(EnhanceOptions::default());
        let raw = r#"[
            {"title": "A", "id": "99"},
            {"title": "B"},
            {"title": "C"},
            {"title": "D"},
            {"title": "E"}
        ]"#;
        let normalized = normalize(&task, raw, "topic");
        assert!(!normalized.fallback);
        let suggestions = normalized.payload.as_suggestions().unwrap().to_vec();
        let ids: Vec<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_suggestion_object_falls_back() {
        // A JSON object where an array is required fails shape validation.
        let task = GenerationTask::TopicEnhancement(EnhanceOptions::default());
        let normalized = normalize(&task, r#"{"title": "A"}"#, "Rust Macros");
        assert!(normalized.fallback);
        let suggestions = normalized.payload.as_suggestions().unwrap();
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].title.contains("Rust Macros"));
    }

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("  plain text  "), "plain text");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        // Inner fences are preserved verbatim.
        let task = GenerationTask::LinkedInPost(LinkedInOptions::default());
        let raw = "```json\n{\"post\": \"use ```rust``` blocks\", \"hashtags\": [], \"cta\": \"x\"}\n```";
        let normalized = normalize(&task, raw, "post");
        match normalized.payload {
            TaskPayload::LinkedIn(payload) => {
                assert_eq!(payload.post, "use ```rust``` blocks")
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }
}
