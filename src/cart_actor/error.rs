//! Error types for the Cart actor.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The catalog has no product with this id.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// No open session with this id.
    #[error("Cart session not found: {0}")]
    SessionNotFound(String),

    /// The line quantity would not fit in a `u32`.
    #[error("Quantity overflow for {0}")]
    QuantityOverflow(ProductId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}
