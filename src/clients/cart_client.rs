//! # Cart Client
//!
//! High-level API for the cart actor. It wraps a `SessionClient<CartSession>`, turns
//! each cart operation into a [`CartAction`], and maps framework failures back onto
//! [`CartError`].

use crate::cart_actor::{CartAction, CartError};
use crate::framework::{ActorClient, FrameworkError, SessionClient};
use crate::model::{CartOpen, CartSession, CartSummary, Money, ProductId, SessionId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: SessionClient<CartSession>,
}

impl CartClient {
    pub fn new(inner: SessionClient<CartSession>) -> Self {
        Self { inner }
    }

    /// Starts an empty cart session.
    #[instrument(skip(self))]
    pub async fn open_cart(&self, shopper: Option<String>) -> Result<SessionId, CartError> {
        debug!("Sending request");
        self.inner
            .open(CartOpen { shopper })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        session: SessionId,
        product_id: ProductId,
    ) -> Result<CartSummary, CartError> {
        self.act(session, CartAction::Add(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(
        &self,
        session: SessionId,
        product_id: ProductId,
    ) -> Result<CartSummary, CartError> {
        self.act(session, CartAction::Remove(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        session: SessionId,
        product_id: ProductId,
        delta: i64,
    ) -> Result<CartSummary, CartError> {
        self.act(session, CartAction::UpdateQuantity(product_id, delta)).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, session: SessionId) -> Result<CartSummary, CartError> {
        self.act(session, CartAction::Clear).await
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, session: SessionId) -> Result<CartSummary, CartError> {
        self.act(session, CartAction::Summary).await
    }

    pub async fn cart_total(&self, session: SessionId) -> Result<Money, CartError> {
        Ok(self.summary(session).await?.total)
    }

    pub async fn cart_item_count(&self, session: SessionId) -> Result<u64, CartError> {
        Ok(self.summary(session).await?.item_count)
    }

    async fn act(&self, session: SessionId, action: CartAction) -> Result<CartSummary, CartError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(session, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<CartSession> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &SessionClient<CartSession> {
        &self.inner
    }

    /// Recovers the original [`CartError`] when the entity raised one.
    fn map_error(e: FrameworkError) -> CartError {
        match e {
            FrameworkError::NotFound(id) => CartError::SessionNotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<CartError>() {
                Ok(cart_error) => *cart_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
