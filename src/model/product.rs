//! A watch offered in the catalog.
//!
//! Products are built once from the fixtures in [`crate::catalog`] and never mutated.
//! The builder-style `with_*` methods exist only to keep those fixtures readable.

use crate::model::Money;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Money,
    pub image: String,
    pub description: String,
    pub features: Option<Vec<String>>,
    pub in_stock: Option<bool>,
    /// Discount in percent, 0..=100.
    pub discount: Option<u8>,
}

impl Product {
    /// Creates a product with no image, description or optional attributes.
    pub fn new(id: u32, name: impl Into<String>, brand: impl Into<String>, price: u64) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            brand: brand.into(),
            price: Money::new(price),
            image: String::new(),
            description: String::new(),
            features: None,
            in_stock: None,
            discount: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = Some(features.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = Some(percent.min(100));
        self
    }

    /// Whether a non-zero discount is set.
    pub fn is_discounted(&self) -> bool {
        self.discount.is_some_and(|d| d > 0)
    }

    /// The price shown next to the struck-through original.
    ///
    /// Equals [`Product::price`] when there is no discount.
    pub fn discounted_price(&self) -> Money {
        match self.discount {
            Some(percent) if percent > 0 => self.price.less_percent(percent),
            _ => self.price,
        }
    }

    /// Absent stock flags count as available.
    pub fn is_available(&self) -> bool {
        self.in_stock.unwrap_or(true)
    }
}
