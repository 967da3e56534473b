//! [`SessionEntity`] implementation for [`CartSession`].
//!
//! The pure [`Cart`](crate::model::Cart) reducer never fails; the checks that need the
//! catalog or guard the quantity range live here, at the actor boundary.

use super::{CartAction, CartContext, CartError};
use crate::framework::SessionEntity;
use crate::model::{Cart, CartOpen, CartSession, CartSummary, ProductId, SessionId};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl SessionEntity for CartSession {
    type Id = SessionId;
    type Open = CartOpen;
    type Action = CartAction;
    type ActionResult = CartSummary;
    type Context = CartContext;
    type Error = CartError;

    fn from_open_params(id: SessionId, params: CartOpen) -> Result<Self, CartError> {
        Ok(Self::new(id, params.shopper))
    }

    /// Applies the storefront's pricing policy to the new, empty cart.
    async fn on_open(&mut self, ctx: &CartContext) -> Result<(), CartError> {
        self.cart = Cart::with_pricing(ctx.pricing);
        Ok(())
    }

    async fn on_close(&self, _ctx: &CartContext) -> Result<(), CartError> {
        debug!(
            session = %self.id,
            items = self.cart.cart_item_count(),
            total = %self.cart.cart_total(),
            "Cart discarded"
        );
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartSummary, CartError> {
        match action {
            CartAction::Add(product_id) => {
                let product = ctx
                    .catalog
                    .get(product_id)
                    .ok_or(CartError::UnknownProduct(product_id))?;
                if self.quantity_of(product_id) == u32::MAX {
                    return Err(CartError::QuantityOverflow(product_id));
                }
                self.cart.add_to_cart(product);
            }
            CartAction::Remove(product_id) => self.cart.remove_from_cart(product_id),
            CartAction::UpdateQuantity(product_id, delta) => {
                let current = self.quantity_of(product_id);
                if current > 0 && i64::from(current).saturating_add(delta) > i64::from(u32::MAX) {
                    return Err(CartError::QuantityOverflow(product_id));
                }
                self.cart.update_quantity(product_id, delta);
            }
            CartAction::Summary => {}
            CartAction::Clear => self.cart.clear(),
        }
        Ok(self.cart.summary())
    }
}

impl CartSession {
    fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.cart.line(product_id).map_or(0, |line| line.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::{Money, PricingPolicy};
    use crate::storefront::Variant;
    use std::sync::Arc;

    fn context(pricing: PricingPolicy) -> CartContext {
        CartContext::new(Arc::new(Catalog::for_variant(Variant::Boutique)), pricing)
    }

    async fn opened(ctx: &CartContext) -> CartSession {
        let mut session = CartSession::from_open_params(SessionId(1), CartOpen::default()).unwrap();
        session.on_open(ctx).await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_add_looks_up_catalog() {
        let ctx = context(PricingPolicy::ListPrice);
        let mut session = opened(&ctx).await;

        let summary = session.handle_action(CartAction::Add(ProductId(5)), &ctx).await.unwrap();
        assert_eq!(summary.item_count, 1);
        assert_eq!(summary.lines[0].name, "Casio Oceanus");
        assert_eq!(summary.total, Money::new(189000));
    }

    #[tokio::test]
    async fn test_unknown_product_is_rejected() {
        let ctx = context(PricingPolicy::ListPrice);
        let mut session = opened(&ctx).await;

        let err = session
            .handle_action(CartAction::Add(ProductId(77)), &ctx)
            .await
            .unwrap_err();
        assert_eq!(err, CartError::UnknownProduct(ProductId(77)));
        assert!(session.cart.is_empty());
    }

    #[tokio::test]
    async fn test_on_open_applies_pricing_policy() {
        let ctx = context(PricingPolicy::Discounted);
        let mut session = opened(&ctx).await;
        assert_eq!(session.cart.pricing(), PricingPolicy::Discounted);

        session.handle_action(CartAction::Add(ProductId(1)), &ctx).await.unwrap();
        let summary = session.handle_action(CartAction::Add(ProductId(1)), &ctx).await.unwrap();
        assert_eq!(summary.total, Money::new(212500));
    }

    #[tokio::test]
    async fn test_quantity_overflow_is_rejected() {
        let ctx = context(PricingPolicy::ListPrice);
        let mut session = opened(&ctx).await;
        session.handle_action(CartAction::Add(ProductId(2)), &ctx).await.unwrap();

        let err = session
            .handle_action(CartAction::UpdateQuantity(ProductId(2), i64::from(u32::MAX)), &ctx)
            .await
            .unwrap_err();
        assert_eq!(err, CartError::QuantityOverflow(ProductId(2)));
        assert_eq!(session.quantity_of(ProductId(2)), 1);
    }

    #[tokio::test]
    async fn test_remove_update_and_clear() {
        let ctx = context(PricingPolicy::ListPrice);
        let mut session = opened(&ctx).await;
        session.handle_action(CartAction::Add(ProductId(2)), &ctx).await.unwrap();
        session.handle_action(CartAction::Add(ProductId(3)), &ctx).await.unwrap();

        let summary = session
            .handle_action(CartAction::UpdateQuantity(ProductId(2), 2), &ctx)
            .await
            .unwrap();
        assert_eq!(summary.quantity_of(ProductId(2)), Some(3));

        let summary = session.handle_action(CartAction::Remove(ProductId(3)), &ctx).await.unwrap();
        assert_eq!(summary.item_count, 3);

        let summary = session.handle_action(CartAction::Clear, &ctx).await.unwrap();
        assert!(summary.is_empty());
    }
}
