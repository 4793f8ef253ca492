use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};
use tracing::debug;

use super::error::ReasoningError;
use super::prompt::build_critique_prompt;

/// Capability seam for the external reasoning service.
///
/// Exactly one request per invocation, no retry, no caching. Callers wanting
/// retry or backoff layer it outside this trait. Tests inject
/// `MockReasoningClient` instead of hitting the network.
#[async_trait]
pub trait ReasoningClient: Send + Sync {
    /// Requests a natural-language critique of `document_text`.
    ///
    /// Empty text is a local precondition failure
    /// ([`ReasoningError::EmptyDocument`]); no remote call is attempted.
    async fn critique(&self, document_text: &str) -> Result<String, ReasoningError>;
}

/// Production adapter backed by [`genai::Client`].
///
/// The credential is resolved by `genai` from the environment
/// (`OPENAI_API_KEY`); its presence is validated at startup by
/// [`Config::from_env`](crate::config::Config::from_env).
pub struct GenaiReasoningClient {
    client: Client,
    model: String,
}

impl GenaiReasoningClient {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            client: Client::default(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl std::fmt::Debug for GenaiReasoningClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiReasoningClient")
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl ReasoningClient for GenaiReasoningClient {
    async fn critique(&self, document_text: &str) -> Result<String, ReasoningError> {
        if document_text.trim().is_empty() {
            return Err(ReasoningError::EmptyDocument);
        }

        let prompt = build_critique_prompt(document_text);
        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "requesting critique from reasoning service"
        );

        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        let response = self
            .client
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| classify_provider_error(&e.to_string()))?;

        match response.first_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(ReasoningError::MalformedResponse {
                reason: "response contained no text content".to_string(),
            }),
        }
    }
}

/// Maps a provider error message onto a [`ReasoningError`] variant.
///
/// `genai` flattens provider failures into one error type, so classification
/// keys on the message. Anything unrecognized is treated as unreachable.
pub(crate) fn classify_provider_error(message: &str) -> ReasoningError {
    let lowered = message.to_lowercase();

    if lowered.contains("401")
        || lowered.contains("unauthorized")
        || lowered.contains("invalid api key")
        || lowered.contains("authentication")
    {
        ReasoningError::Unauthenticated {
            message: message.to_string(),
        }
    } else if lowered.contains("429")
        || lowered.contains("rate limit")
        || lowered.contains("quota")
    {
        ReasoningError::RateLimited {
            message: message.to_string(),
        }
    } else {
        ReasoningError::Unreachable {
            message: message.to_string(),
        }
    }
}
