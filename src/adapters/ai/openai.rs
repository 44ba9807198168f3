//! OpenAI adapter - implements [`TextGenerator`] against the chat
//! completions API.
//!
//! Non-streaming only; the conversation engine consumes whole replies.
//! The adapter owns the request timeout, per the core's contract.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{GenerationError, GenerationPrompt, TextGenerator};

/// Configuration for the OpenAI generator.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
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

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI-backed text generator.
pub struct OpenAiGenerator {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::InvalidRequest(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn to_api_request(&self, prompt: &GenerationPrompt) -> ApiRequest {
        ApiRequest {
            model: self.config.model.clone(),
            messages: vec![
                ApiMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                ApiMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            max_tokens: prompt.max_tokens,
            temperature: prompt.temperature,
        }
    }

    async fn send_request(&self, prompt: &GenerationPrompt) -> Result<Response, GenerationError> {
        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&self.to_api_request(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    GenerationError::network(format!("Connection failed: {}", e))
                } else {
                    GenerationError::network(e.to_string())
                }
            })
    }

    async fn check_status(&self, response: Response) -> Result<Response, GenerationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(GenerationError::AuthenticationFailed),
            400 => Err(GenerationError::InvalidRequest(error_body)),
            429 | 500..=599 => Err(GenerationError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(GenerationError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<String, GenerationError> {
        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::parse("No choices in response"))?;

        Ok(choice.message.content)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: GenerationPrompt) -> Result<String, GenerationError> {
        let response = self.send_request(&prompt).await?;
        let response = self.check_status(response).await?;
        self.parse_response(response).await
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ApiMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_overrides_defaults() {
        let config = OpenAiConfig::new("sk-test")
            .with_model("gpt-4-turbo")
            .with_base_url("http://localhost:9999/v1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "gpt-4-turbo");
        assert_eq!(config.base_url, "http://localhost:9999/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn api_request_carries_both_roles() {
        let generator = OpenAiGenerator::new(OpenAiConfig::new("sk-test")).unwrap();
        let prompt = GenerationPrompt::new("be helpful", "write a summary", 300, 0.7);

        let request = generator.to_api_request(&prompt);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.max_tokens, 300);
    }

    #[test]
    fn completions_url_appends_path() {
        let generator =
            OpenAiGenerator::new(OpenAiConfig::new("sk-test").with_base_url("http://host/v1"))
                .unwrap();
        assert_eq!(generator.completions_url(), "http://host/v1/chat/completions");
    }

    #[test]
    fn api_response_parses_openai_shape() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"Hello!"}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Hello!");
    }
}
