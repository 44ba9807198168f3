//! Text generator port - the narrow interface to the language-model
//! service.
//!
//! The engine needs exactly one capability from the outside world: a
//! system instruction plus a user instruction in, generated text out,
//! fallibly. Keeping the port this narrow lets the orchestrator and both
//! generators run against a deterministic stub in tests.

use async_trait::async_trait;
use thiserror::Error;

/// A single generation request: prompt pair plus sampling limits.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPrompt {
    /// System instruction guiding model behavior.
    pub system: String,
    /// The task instruction.
    pub user: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl GenerationPrompt {
    /// Creates a prompt with the given instructions and limits.
    pub fn new(
        system: impl Into<String>,
        user: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            max_tokens,
            temperature,
        }
    }
}

/// Port for the external text-generation capability.
///
/// Implementations own their own timeout policy. The core never retries;
/// a failed call degrades to static fallback text at the call site.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for the prompt pair.
    async fn generate(&self, prompt: GenerationPrompt) -> Result<String, GenerationError>;
}

/// Failures from the text-generation capability.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// Service is unreachable or returned a server error.
    #[error("generation service unavailable: {0}")]
    Unavailable(String),

    /// Network failure during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Response could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// API key missing or rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Request was rejected as malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl GenerationError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
