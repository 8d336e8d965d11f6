//! Gemini completion provider

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};
use crate::provider::CompletionProvider;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: Client,
    model: String,
    base_url: String,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set custom base URL (for API-compatible services and tests)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Deserialize)]
struct GeminiCandidateContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Deserialize)]
struct GeminiErrorBody {
    error: Option<GeminiErrorDetail>,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: Option<String>,
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str, api_key: &str) -> Result<String> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or(text);
            tracing::warn!(status, %message, "Gemini request failed");
            return Err(GenerateError::Provider(message));
        }

        let data: GeminiResponse = response.json().await?;
        let text = data
            .candidates
            .and_then(|mut c| {
                if c.is_empty() {
                    None
                } else {
                    Some(c.remove(0))
                }
            })
            .and_then(|c| c.content.parts)
            .map(|parts| {
                parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| GenerateError::Provider("No response from Gemini".to_string()))?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_body(text: &str) -> serde_json::Value {
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ] } }
            ]
        })
    }

    #[tokio::test]
    async fn test_complete_returns_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-1.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [ { "parts": [ { "text": "say hi" } ] } ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("hi")))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new().with_base_url(server.uri());
        let text = client.complete("say hi", "test-key").await.unwrap();
        assert_eq!(text, "hi");
    }

    #[tokio::test]
    async fn test_non_success_surfaces_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "message": "Resource has been exhausted (e.g. check quota)." }
            })))
            .mount(&server)
            .await;

        let client = GeminiClient::new().with_base_url(server.uri());
        let err = client.complete("prompt", "k").await.unwrap_err();
        match err {
            GenerateError::Provider(message) => assert!(message.contains("quota")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let client = GeminiClient::new().with_base_url(server.uri());
        let err = client.complete("prompt", "k").await.unwrap_err();
        assert!(matches!(err, GenerateError::Provider(_)));
    }

    #[tokio::test]
    async fn test_custom_model_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-1.5-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new()
            .with_base_url(server.uri())
            .with_model("gemini-1.5-pro");
        client.complete("prompt", "k").await.unwrap();
    }
}
