use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::error::ReasoningError;
use super::client::ReasoningClient;

/// Scripted behavior for [`MockReasoningClient`].
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return the given critique text.
    Respond(String),
    /// Sleep for the duration, then return the text (drives timeout tests).
    RespondAfter(Duration, String),
    /// Fail with [`ReasoningError::Unauthenticated`].
    Unauthenticated,
    /// Fail with [`ReasoningError::RateLimited`].
    RateLimited,
    /// Fail with [`ReasoningError::Unreachable`].
    Unreachable,
    /// Fail with [`ReasoningError::MalformedResponse`].
    MalformedResponse,
}

/// Deterministic in-process stand-in for the reasoning service.
///
/// Counts invocations so tests can assert that no network call would have
/// been made on fast-fail paths.
#[derive(Debug)]
pub struct MockReasoningClient {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockReasoningClient {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn respond_with(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Respond(text.into()))
    }

    pub fn respond_after(delay: Duration, text: impl Into<String>) -> Self {
        Self::new(MockBehavior::RespondAfter(delay, text.into()))
    }

    /// Number of `critique` invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReasoningClient for MockReasoningClient {
    async fn critique(&self, document_text: &str) -> Result<String, ReasoningError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if document_text.trim().is_empty() {
            return Err(ReasoningError::EmptyDocument);
        }

        match &self.behavior {
            MockBehavior::Respond(text) => Ok(text.clone()),
            MockBehavior::RespondAfter(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
            MockBehavior::Unauthenticated => Err(ReasoningError::Unauthenticated {
                message: "401 invalid api key".to_string(),
            }),
            MockBehavior::RateLimited => Err(ReasoningError::RateLimited {
                message: "429 too many requests".to_string(),
            }),
            MockBehavior::Unreachable => Err(ReasoningError::Unreachable {
                message: "connection refused".to_string(),
            }),
            MockBehavior::MalformedResponse => Err(ReasoningError::MalformedResponse {
                reason: "response contained no text content".to_string(),
            }),
        }
    }
}
