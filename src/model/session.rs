use crate::model::Cart;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for cart sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// One shopper's cart.
///
/// # Actor Framework
/// This struct implements [`SessionEntity`](crate::framework::SessionEntity), so every
/// open session lives inside the cart [`SessionActor`](crate::framework::SessionActor)
/// and is discarded when closed.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSession {
    pub id: SessionId,
    pub shopper: Option<String>,
    pub cart: Cart,
}

impl CartSession {
    pub fn new(id: SessionId, shopper: Option<String>) -> Self {
        Self {
            id,
            shopper,
            cart: Cart::new(),
        }
    }
}

/// Payload for opening a cart session.
#[derive(Debug, Clone, Default)]
pub struct CartOpen {
    /// Free-form label used only in logs.
    pub shopper: Option<String>,
}
