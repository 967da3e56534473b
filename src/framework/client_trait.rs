//! # ActorClient Trait
//!
//! Shared surface for domain clients: implement `inner` and `map_error`, and `get`
//! and `close` come for free.

use crate::framework::{FrameworkError, SessionClient, SessionEntity};
use async_trait::async_trait;

/// Trait for session-specific clients to inherit the common operations.
#[async_trait]
pub trait ActorClient<T: SessionEntity>: Send + Sync {
    /// The domain error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic `SessionClient`.
    fn inner(&self) -> &SessionClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a session snapshot by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Close a session and discard its state.
    #[tracing::instrument(skip(self))]
    async fn close(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().close(id).await.map_err(Self::map_error)
    }
}
