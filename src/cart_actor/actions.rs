//! Operations a client can request on a cart session.
//!
//! Every action answers with a fresh [`CartSummary`](crate::model::CartSummary), so the
//! caller can re-render the cart sheet and badge without a second round-trip.

use crate::model::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Looks the product up in the catalog, then adds one unit.
    ///
    /// # Errors
    /// Fails with `UnknownProduct` if the catalog has no such id.
    Add(ProductId),
    /// Drops the product's line. No-op if absent.
    Remove(ProductId),
    /// Adjusts the quantity by a signed delta; a result of zero or less removes the line.
    UpdateQuantity(ProductId, i64),
    /// Reads the cart without changing it.
    Summary,
    /// Empties the cart.
    Clear,
}
