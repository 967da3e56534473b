//! # Cart Actor
//!
//! Keeps every shopper's cart inside one [`SessionActor`], so carts are scoped to a
//! session instead of living in a process-wide global.
//!
//! ## Structure
//!
//! - [`entity`] - [`SessionEntity`](crate::framework::SessionEntity) impl for [`CartSession`]
//! - [`actions`] - [`CartAction`], the operations a client can request
//! - [`error`] - [`CartError`] for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use timepiece_store::cart_actor::{self, CartContext};
//! use timepiece_store::catalog::Catalog;
//! use timepiece_store::model::{PricingPolicy, ProductId};
//! use timepiece_store::storefront::Variant;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = cart_actor::new(32);
//!     let catalog = Arc::new(Catalog::for_variant(Variant::Classic));
//!     let context = CartContext::new(catalog, PricingPolicy::ListPrice);
//!     tokio::spawn(actor.run(context));
//!
//!     let session = client.open_cart(None).await?;
//!     let summary = client.add_to_cart(session, ProductId(1)).await?;
//!     assert_eq!(summary.item_count, 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::catalog::Catalog;
use crate::clients::CartClient;
use crate::framework::SessionActor;
use crate::model::{CartSession, PricingPolicy};
use std::sync::Arc;

/// Shared dependencies injected into every cart session.
#[derive(Debug, Clone)]
pub struct CartContext {
    pub catalog: Arc<Catalog>,
    pub pricing: PricingPolicy,
}

impl CartContext {
    pub fn new(catalog: Arc<Catalog>, pricing: PricingPolicy) -> Self {
        Self { catalog, pricing }
    }
}

/// Creates a new cart actor and its client.
pub fn new(buffer_size: usize) -> (SessionActor<CartSession>, CartClient) {
    let (actor, generic_client) = SessionActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
