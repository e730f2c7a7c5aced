//! OpenAI-compatible chat-completions backend.
//!
//! Talks to the provider's REST API directly over reqwest. The JSON
//! response format is requested so the model returns a bare object, and
//! every request carries a bounded timeout so a slow provider cannot hang
//! a session.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use moneyquest_core::error::GeneratorError;
use moneyquest_core::generator::GeneratorBackend;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model; fast and cheap, good enough for short kid-facing stories.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Per-request timeout. Generation is the slowest external call in the
/// system; anything beyond this falls back to offline content.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Creative but consistent.
const TEMPERATURE: f64 = 0.8;

/// Backend implementation that talks to an OpenAI-compatible HTTP API.
#[derive(Debug, Clone)]
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiBackend {
    /// Creates a backend with the provided API key and the default model.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Overrides the model after construction.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the endpoint, for self-hosted OpenAI-compatible gateways.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn request_body<'a>(&'a self, system: &'a str, prompt: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            response_format: ResponseFormat { kind: "json_object" },
        }
    }
}

#[async_trait]
impl GeneratorBackend for OpenAiBackend {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GeneratorError> {
        let body = self.request_body(system, prompt);

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|err| GeneratorError::Backend(format!("request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_owned());
            return Err(GeneratorError::Backend(format!(
                "provider returned {status}: {body_text}"
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| GeneratorError::Backend(format!("invalid provider envelope: {err}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GeneratorError::Backend("provider returned no content".to_owned()))
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_carries_model_messages_and_json_format() {
        // Arrange
        let backend = OpenAiBackend::new("sk-test").with_model("gpt-4o");

        // Act
        let body = serde_json::to_value(backend.request_body("be terse", "tell a story")).unwrap();

        // Assert
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "be terse");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "tell a story");
    }

    #[test]
    fn test_defaults() {
        let backend = OpenAiBackend::new("sk-test");
        assert_eq!(backend.model, DEFAULT_MODEL);
        assert_eq!(backend.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_envelope_extracts_first_choice_content() {
        let raw = r#"{"choices":[{"message":{"content":"{\"ok\":true}"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("{\"ok\":true}"));
    }
}
