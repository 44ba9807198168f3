//! Mock text generator for testing and offline use.
//!
//! Scripted responses are consumed in order; an exhausted script yields an
//! error, which makes an unscripted mock behave exactly like an outage and
//! drives the engine's static-fallback path.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GenerationError, GenerationPrompt, TextGenerator};

/// Configurable scripted implementation of [`TextGenerator`].
#[derive(Debug, Clone, Default)]
pub struct MockTextGenerator {
    script: Arc<Mutex<VecDeque<Result<String, GenerationError>>>>,
    calls: Arc<Mutex<Vec<GenerationPrompt>>>,
}

impl MockTextGenerator {
    /// Creates a mock with an empty script (every call fails).
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Ok(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GenerationError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns every prompt received so far.
    pub fn calls(&self) -> Vec<GenerationPrompt> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: GenerationPrompt) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(prompt);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::unavailable("no scripted response")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(user: &str) -> GenerationPrompt {
        GenerationPrompt::new("system", user, 100, 0.7)
    }

    #[tokio::test]
    async fn responses_are_consumed_in_order() {
        let mock = MockTextGenerator::new()
            .with_response("first")
            .with_response("second");

        assert_eq!(mock.generate(prompt("a")).await.unwrap(), "first");
        assert_eq!(mock.generate(prompt("b")).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn exhausted_script_errors() {
        let mock = MockTextGenerator::new().with_response("only");
        mock.generate(prompt("a")).await.unwrap();

        let err = mock.generate(prompt("b")).await.unwrap_err();
        assert!(matches!(err, GenerationError::Unavailable(_)));
    }

    #[tokio::test]
    async fn calls_are_recorded() {
        let mock = MockTextGenerator::new().with_response("ok");
        mock.generate(prompt("hello")).await.unwrap();

        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.calls()[0].user, "hello");
    }

    #[tokio::test]
    async fn queued_errors_are_returned() {
        let mock = MockTextGenerator::new().with_error(GenerationError::AuthenticationFailed);
        let err = mock.generate(prompt("a")).await.unwrap_err();
        assert!(matches!(err, GenerationError::AuthenticationFailed));
    }
}
