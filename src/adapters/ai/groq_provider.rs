//! Groq Provider - AiProvider implementation for Groq's OpenAI-compatible API.
//!
//! Sends chat completions to `{base_url}/chat/completions` with a bearer
//! credential. One attempt per call: there is no retry loop here because the
//! caller substitutes the static fallback on any failure, trading latency
//! predictability for resilience. Timeouts map to [`AiError::Timeout`] and
//! are treated like any other HTTP failure.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GroqConfig::new(api_key)
//!     .with_model("llama-3.3-70b-versatile")
//!     .with_timeout(Duration::from_secs(8));
//!
//! let provider = GroqProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    TokenUsage,
};

/// Configuration for the Groq provider.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the OpenAI-compatible API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GroqConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "llama-3.3-70b-versatile".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            timeout: Duration::from_secs(8),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Groq API provider implementation.
pub struct GroqProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqProvider {
    /// Creates a new Groq provider with the given configuration.
    pub fn new(config: GroqConfig) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts our request to the wire format.
    fn to_wire_request(&self, request: &CompletionRequest) -> WireRequest {
        let mut messages = Vec::new();

        if let Some(ref prompt) = request.system_prompt {
            messages.push(WireMessage {
                role: "system".to_string(),
                content: prompt.clone(),
            });
        }

        for msg in &request.messages {
            messages.push(WireMessage {
                role: match msg.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content.clone(),
            });
        }

        WireRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    /// Sends a request, mapping transport failures.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AiError> {
        let wire_request = self.to_wire_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    AiError::network(format!("Connection failed: {}", e))
                } else {
                    AiError::network(e.to_string())
                }
            })
    }

    /// Maps the response status, reading the error body on failure.
    async fn handle_response_status(&self, response: Response) -> Result<Response, AiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(AiError::AuthenticationFailed),
            code => Err(AiError::http(code, error_body)),
        }
    }

    /// Parses a successful response body.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AiError> {
        let response = self.handle_response_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| AiError::parse(format!("Failed to read response body: {}", e)))?;

        parse_completion_body(&body)
    }
}

#[async_trait]
impl AiProvider for GroqProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }
}

/// Parses a chat-completions response body into a CompletionResponse.
fn parse_completion_body(body: &str) -> Result<CompletionResponse, AiError> {
    let wire_response: WireResponse = serde_json::from_str(body)
        .map_err(|e| AiError::parse(format!("Failed to parse response: {}", e)))?;

    let choice = wire_response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AiError::parse("No choices in response"))?;

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    };

    let usage = wire_response
        .usage
        .map(|u| TokenUsage::new(u.prompt_tokens, u.completion_tokens))
        .unwrap_or_default();

    Ok(CompletionResponse {
        content: choice.message.content,
        usage,
        model: wire_response.model,
        finish_reason,
    })
}

// ----- Wire types (OpenAI-compatible) -----

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    model: String,
    choices: Vec<WireChoice>,
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = GroqConfig::new("gsk-test")
            .with_model("llama-3.1-8b-instant")
            .with_base_url("https://custom.api.com/v1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.base_url, "https://custom.api.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key(), "gsk-test");
    }

    #[test]
    fn completions_url_appends_path() {
        let provider = GroqProvider::new(GroqConfig::new("k")).unwrap();
        assert_eq!(
            provider.completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn wire_request_includes_system_and_user_messages() {
        let provider = GroqProvider::new(GroqConfig::new("k")).unwrap();
        let request = CompletionRequest::new()
            .with_system_prompt("JSON only")
            .with_message(MessageRole::User, "my dream")
            .with_temperature(0.7)
            .with_max_tokens(2000);

        let wire = provider.to_wire_request(&request);
        assert_eq!(wire.messages.len(), 2);
        assert_eq!(wire.messages[0].role, "system");
        assert_eq!(wire.messages[1].role, "user");
        assert_eq!(wire.temperature, Some(0.7));
        assert_eq!(wire.max_tokens, Some(2000));
        assert_eq!(wire.model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn wire_request_omits_unset_sampling_fields() {
        let provider = GroqProvider::new(GroqConfig::new("k")).unwrap();
        let wire = provider.to_wire_request(&CompletionRequest::new());
        let json = serde_json::to_string(&wire).unwrap();

        assert!(!json.contains("max_tokens"));
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn parse_completion_body_extracts_content_and_usage() {
        let body = r#"{
            "model": "llama-3.3-70b-versatile",
            "choices": [
                {"message": {"role": "assistant", "content": "{\"summary\": \"...\"}"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 250, "completion_tokens": 400}
        }"#;

        let response = parse_completion_body(body).unwrap();
        assert_eq!(response.content, "{\"summary\": \"...\"}");
        assert_eq!(response.model, "llama-3.3-70b-versatile");
        assert_eq!(response.finish_reason, FinishReason::Stop);
        assert_eq!(response.usage.total_tokens, 650);
    }

    #[test]
    fn parse_completion_body_without_choices_fails() {
        let body = r#"{"model": "m", "choices": [], "usage": null}"#;
        let err = parse_completion_body(body).unwrap_err();
        assert!(matches!(err, AiError::Parse(_)));
    }

    #[test]
    fn parse_completion_body_maps_length_finish() {
        let body = r#"{
            "model": "m",
            "choices": [{"message": {"role": "assistant", "content": "x"}, "finish_reason": "length"}]
        }"#;
        let response = parse_completion_body(body).unwrap();
        assert_eq!(response.finish_reason, FinishReason::Length);
        assert_eq!(response.usage, TokenUsage::default());
    }

    #[test]
    fn parse_completion_body_rejects_garbage() {
        assert!(matches!(
            parse_completion_body("not json"),
            Err(AiError::Parse(_))
        ));
    }
}
