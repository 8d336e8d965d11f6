//! Draftforge AI - blog-content generation pipeline
//!
//! This crate provides:
//! - Prompt construction for blog, repurposing, enhancement and translation tasks
//! - A single-call completion provider abstraction (Gemini over REST)
//! - Response normalization: fence stripping, JSON shape validation, deterministic fallbacks
//! - A dispatcher returning a uniform result envelope

pub mod classify;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod payload;
pub mod pipeline;
pub mod prompt;
pub mod provider;
pub mod sample;
pub mod task;

// Re-export commonly used types
pub use classify::{ErrorClassifier, SubstringClassifier};
pub use error::{ErrorKind, GenerateError, Result};
pub use payload::{
    EmailPayload, GenerationResult, LinkedInPayload, PodcastPayload, TaskPayload,
    TopicSuggestion, TwitterPayload,
};
pub use pipeline::Generator;
pub use prompt::build_prompt;
pub use provider::{CompletionProvider, GeminiClient, MockProvider, MockReply};
pub use sample::sample_blog;
pub use task::{
    Audience, BlogOptions, EmailOptions, EmailStyle, EmailTemplate, EnhanceOptions, EnhanceStyle,
    GenerationRequest, GenerationTask, Intent, Length, LinkedInOptions, LinkedInStyle,
    PodcastOptions, PodcastStyle, PostLength, ThreadLength, ThreadStyle, Tone, TranslateOptions,
    TwitterOptions, WritingStyle,
};
