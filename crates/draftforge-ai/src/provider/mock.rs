//! Scripted mock provider for tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{GenerateError, Result};
use crate::provider::CompletionProvider;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return completion text.
    Text(String),
    /// Fail with a provider error message.
    Error(String),
}

impl MockReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

/// Deterministic provider stub driven by scripted replies.
///
/// Records every call so tests can assert call counts and the exact prompt
/// and key the pipeline handed over.
#[derive(Debug, Clone, Default)]
pub struct MockProvider {
    script: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_replies(replies: Vec<MockReply>) -> Self {
        Self {
            script: Arc::new(Mutex::new(replies.into())),
            ..Self::default()
        }
    }

    pub fn replying(reply: MockReply) -> Self {
        Self::from_replies(vec![reply])
    }

    pub async fn push(&self, reply: MockReply) {
        self.script.lock().await.push_back(reply);
    }

    /// Number of completed `complete` calls.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Recorded (prompt, api_key) pairs, in call order.
    pub async fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, prompt: &str, api_key: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .await
            .push((prompt.to_string(), api_key.to_string()));

        let reply = self.script.lock().await.pop_front();
        match reply {
            Some(MockReply::Text(content)) => Ok(content),
            Some(MockReply::Error(message)) => Err(GenerateError::Provider(message)),
            None => Err(GenerateError::Provider("mock script exhausted".to_string())),
        }
    }
}
