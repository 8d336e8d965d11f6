//! Completion provider abstraction.
//!
//! The pipeline depends only on [`CompletionProvider`]; provider identity
//! (vendor, endpoint, model family) is configuration, not contract.

mod gemini;
mod mock;

use async_trait::async_trait;

use crate::error::Result;

pub use gemini::GeminiClient;
pub use mock::{MockProvider, MockReply};

/// A text-in/text-out completion service.
///
/// Implementations perform exactly one request per call: no retries, no
/// caching, no single-flight. Callers re-invoke the whole pipeline if they
/// want another attempt.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name, for logging.
    fn name(&self) -> &str;

    /// Model identifier, fixed per client instance.
    fn model(&self) -> &str;

    /// Run one completion request and return the raw completion text.
    ///
    /// Provider-reported failures come back as
    /// [`GenerateError::Provider`](crate::GenerateError::Provider) with the
    /// raw message; transport failures as
    /// [`GenerateError::Http`](crate::GenerateError::Http). Classification
    /// into auth/quota/rate-limit kinds happens in the dispatcher.
    async fn complete(&self, prompt: &str, api_key: &str) -> Result<String>;
}
