//! The shopping cart reducer.
//!
//! [`Cart`] is a plain value: every operation is synchronous, total and never fails.
//! Unknown product ids are simply ignored by the removal and quantity operations.

use crate::model::{Money, Product, ProductId};
use serde::{Deserialize, Serialize};

/// Which price a cart line captures when a product is first added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingPolicy {
    /// The catalog list price, ignoring any discount.
    #[default]
    ListPrice,
    /// The discounted price shown on the product card.
    Discounted,
}

impl PricingPolicy {
    pub fn unit_price(self, product: &Product) -> Money {
        match self {
            PricingPolicy::ListPrice => product.price,
            PricingPolicy::Discounted => product.discounted_price(),
        }
    }
}

/// One product in the cart, with its details copied at add time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub unit_price: Money,
    /// Always at least 1; a line reaching zero is removed.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product, unit_price: Money) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            image: product.image.clone(),
            unit_price,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// An ordered list of cart lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    #[serde(skip)]
    pricing: PricingPolicy,
}

impl Cart {
    /// An empty cart that captures list prices.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pricing(pricing: PricingPolicy) -> Self {
        Self {
            lines: Vec::new(),
            pricing,
        }
    }

    pub fn pricing(&self) -> PricingPolicy {
        self.pricing
    }

    /// Increments the product's line, or appends a new line with quantity 1.
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.position(product.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
            }
            None => {
                let unit_price = self.pricing.unit_price(product);
                self.lines.push(CartLine::from_product(product, unit_price));
            }
        }
    }

    /// Drops the product's line if there is one.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// Adds `delta` to the line's quantity, removing the line if the result is not positive.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) {
        let Some(index) = self.position(product_id) else {
            return;
        };
        let next = i64::from(self.lines[index].quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
    }

    /// Sum of every line's captured unit price times its quantity.
    pub fn cart_total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of all quantities, as shown on the cart badge.
    pub fn cart_item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.clone(),
            total: self.cart_total(),
            item_count: self.cart_item_count(),
        }
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product_id == product_id)
    }
}

/// Everything a caller needs to render the cart sheet and badge.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: Money,
    pub item_count: u64,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map(|line| line.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presage() -> Product {
        Product::new(1, "Seiko Presage", "SEIKO", 125000).with_discount(15)
    }

    fn eco_drive() -> Product {
        Product::new(2, "Citizen Eco-Drive", "CITIZEN", 95000)
    }

    fn bambino() -> Product {
        Product::new(3, "Orient Bambino", "ORIENT", 78000)
    }

    #[test]
    fn test_adding_twice_increments_single_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(&eco_drive());
        cart.add_to_cart(&eco_drive());

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(ProductId(2)).unwrap().quantity, 2);
    }

    #[test]
    fn test_scenario_totals() {
        let mut cart = Cart::new();
        cart.add_to_cart(&presage());
        cart.add_to_cart(&eco_drive());
        cart.add_to_cart(&presage());

        let ids: Vec<(ProductId, u32)> = cart
            .lines()
            .iter()
            .map(|line| (line.product_id, line.quantity))
            .collect();
        assert_eq!(ids, vec![(ProductId(1), 2), (ProductId(2), 1)]);
        assert_eq!(cart.cart_total(), Money::new(345000));
        assert_eq!(cart.cart_item_count(), 3);
    }

    #[test]
    fn test_remove_excludes_line_from_count() {
        let mut cart = Cart::new();
        cart.add_to_cart(&presage());
        cart.add_to_cart(&eco_drive());
        cart.add_to_cart(&eco_drive());

        cart.remove_from_cart(ProductId(2));
        assert_eq!(cart.cart_item_count(), 1);
        assert!(cart.line(ProductId(2)).is_none());

        // Removing again is a no-op.
        cart.remove_from_cart(ProductId(2));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(&bambino());
        cart.add_to_cart(&bambino());
        cart.add_to_cart(&bambino());

        cart.update_quantity(ProductId(3), -3);
        assert!(cart.is_empty());
        assert_eq!(cart.cart_total(), Money::ZERO);
    }

    #[test]
    fn test_update_quantity_below_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(&bambino());
        cart.update_quantity(ProductId(3), -10);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_in_place_keeps_order() {
        let mut cart = Cart::new();
        cart.add_to_cart(&presage());
        cart.add_to_cart(&eco_drive());

        cart.update_quantity(ProductId(1), 4);
        cart.update_quantity(ProductId(1), -2);

        assert_eq!(cart.lines()[0].product_id, ProductId(1));
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.cart_item_count(), 4);
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(&presage());
        cart.update_quantity(ProductId(99), 5);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.cart_item_count(), 1);
    }

    #[test]
    fn test_list_price_policy_ignores_discount() {
        let mut cart = Cart::new();
        cart.add_to_cart(&presage());
        cart.add_to_cart(&presage());
        assert_eq!(cart.line(ProductId(1)).unwrap().line_total(), Money::new(250000));
    }

    #[test]
    fn test_discounted_policy_snapshots_discounted_price() {
        let mut cart = Cart::with_pricing(PricingPolicy::Discounted);
        cart.add_to_cart(&presage());
        cart.add_to_cart(&presage());
        assert_eq!(cart.line(ProductId(1)).unwrap().unit_price, Money::new(106250));
        assert_eq!(cart.cart_total(), Money::new(212500));
    }

    #[test]
    fn test_snapshot_price_survives_catalog_change() {
        let mut cart = Cart::new();
        let mut product = eco_drive();
        cart.add_to_cart(&product);

        product.price = Money::new(1);
        cart.add_to_cart(&product);

        assert_eq!(cart.cart_total(), Money::new(190000));
    }

    #[test]
    fn test_summary_and_clear() {
        let mut cart = Cart::new();
        cart.add_to_cart(&presage());
        cart.add_to_cart(&bambino());

        let summary = cart.summary();
        assert_eq!(summary.total, Money::new(203000));
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.quantity_of(ProductId(3)), Some(1));

        cart.clear();
        assert!(cart.summary().is_empty());
        assert_eq!(cart.summary().total, Money::ZERO);
    }
}
