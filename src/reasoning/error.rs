use thiserror::Error;

#[derive(Debug, Error)]
/// Failures of one reasoning-service call. All variants are non-fatal to the
/// overall analysis; the orchestrator degrades to an unavailable critique.
pub enum ReasoningError {
    /// Local precondition: the document text was empty. No remote call made.
    #[error("document text is empty, refusing to build a critique request")]
    EmptyDocument,

    /// Missing or invalid service credential.
    #[error("reasoning service rejected the credential: {message}")]
    Unauthenticated { message: String },

    /// The service throttled the request.
    #[error("reasoning service rate limit hit: {message}")]
    RateLimited { message: String },

    /// Network failure or service outage.
    #[error("reasoning service unreachable: {message}")]
    Unreachable { message: String },

    /// The service answered without usable text content.
    #[error("malformed reasoning service response: {reason}")]
    MalformedResponse { reason: String },
}
