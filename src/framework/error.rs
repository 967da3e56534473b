//! # Framework Errors
//!
//! Errors raised by the session plumbing rather than by a particular entity.

/// Errors that can occur within the session framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Session ids exhausted")]
    IdsExhausted,
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
