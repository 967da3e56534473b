//! # SessionEntity Trait
//!
//! The contract every kind of session state must satisfy to live inside a
//! [`SessionActor`](crate::framework::SessionActor). Associated types pin down the id,
//! the open payload, the actions and the context, so a cart action can never be sent
//! to some other kind of session.
//!
//! # Provided Methods (Hooks)
//! - [`SessionEntity::on_open`]
//! - [`SessionEntity::on_close`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any session state must implement to be managed by `SessionActor`.
///
/// # Async & Context
/// Hooks are `async` so they may await other actors. The `Context` is handed to
/// `SessionActor::run()` rather than `new()`, and every hook receives a reference to it.
#[async_trait]
pub trait SessionEntity: Clone + Send + Sync + 'static {
    /// Session identifier. Built from the actor's `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload used to open a new session.
    type Open: Send + Sync + Debug;

    /// Session-specific operations (e.g. `Add(ProductId)`).
    type Action: Send + Sync + Debug;

    /// The value returned by every action.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies shared by every session. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum for the whole entity, not one per action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the session state from its freshly allocated id and the open payload.
    fn from_open_params(id: Self::Id, params: Self::Open) -> Result<Self, Self::Error>;

    /// Called after construction, before the session becomes visible.
    async fn on_open(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called right before the session is discarded.
    async fn on_close(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle one session-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
