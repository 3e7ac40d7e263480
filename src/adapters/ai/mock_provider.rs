//! Mock AI Provider for testing.
//!
//! Configurable implementation of the AiProvider port so tests can exercise
//! the interpretation flow without calling a real model API.
//!
//! # Features
//!
//! - Pre-configured responses (consumed in order)
//! - Error injection for fallback-path testing
//! - Call recording for verification (e.g. "empty input makes no call")
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAiProvider::new()
//!     .with_response(r#"{"summary": "..."}"#)
//!     .with_error(AiError::http(500, "down"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, TokenUsage,
};

/// A queued mock reply.
#[derive(Debug, Clone)]
enum MockReply {
    Success(String),
    Failure(AiError),
}

/// Mock model provider for testing.
#[derive(Debug, Clone, Default)]
pub struct MockAiProvider {
    /// Pre-configured replies (consumed in order).
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockAiProvider {
    /// Creates a mock with no configured replies.
    ///
    /// An unqueued call fails with a network error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful completion with the given content.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(content.into()));
        self
    }

    /// Queues a failing completion.
    pub fn with_error(self, error: AiError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(error));
        self
    }

    /// Number of completion calls made against this mock.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Recorded completion requests, oldest first.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        self.calls.lock().unwrap().push(request);

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockReply::Failure(AiError::Network(
                "no mock reply configured".to_string(),
            )));

        match reply {
            MockReply::Success(content) => Ok(CompletionResponse {
                content,
                usage: TokenUsage::new(10, 20),
                model: "mock".to_string(),
                finish_reason: FinishReason::Stop,
            }),
            MockReply::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MessageRole;

    #[tokio::test]
    async fn mock_returns_queued_responses_in_order() {
        let provider = MockAiProvider::new()
            .with_response("first")
            .with_response("second");

        let r1 = provider.complete(CompletionRequest::new()).await.unwrap();
        let r2 = provider.complete(CompletionRequest::new()).await.unwrap();

        assert_eq!(r1.content, "first");
        assert_eq!(r2.content, "second");
    }

    #[tokio::test]
    async fn mock_returns_queued_errors() {
        let provider = MockAiProvider::new().with_error(AiError::http(500, "down"));

        let err = provider.complete(CompletionRequest::new()).await.unwrap_err();
        assert!(matches!(err, AiError::Http { status: 500, .. }));
    }

    #[tokio::test]
    async fn mock_records_calls() {
        let provider = MockAiProvider::new().with_response("ok");
        assert_eq!(provider.call_count(), 0);

        let request = CompletionRequest::new().with_message(MessageRole::User, "hello");
        provider.complete(request).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.calls()[0].messages[0].content, "hello");
    }

    #[tokio::test]
    async fn unqueued_call_fails() {
        let provider = MockAiProvider::new();
        let err = provider.complete(CompletionRequest::new()).await.unwrap_err();
        assert!(matches!(err, AiError::Network(_)));
    }
}
