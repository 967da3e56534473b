//! # Product Catalog
//!
//! A read-only list of watches, built once per storefront variant from the literal
//! fixtures in [`fixtures`]. Lookups and the brand filter are pure and linear in the
//! number of products.

pub mod fixtures;

use crate::model::{Product, ProductId};
use crate::storefront::Variant;
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

/// Brand selector for [`Catalog::filter_by_brand`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BrandFilter {
    #[default]
    All,
    /// Exact, case-sensitive brand name.
    Brand(String),
}

impl BrandFilter {
    /// The selector value meaning "no filter".
    pub const ALL: &'static str = "all";

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Brand(brand) => product.brand == *brand,
        }
    }
}

impl FromStr for BrandFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL {
            Ok(BrandFilter::All)
        } else {
            Ok(BrandFilter::Brand(s.to_string()))
        }
    }
}

impl From<&str> for BrandFilter {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(filter) => filter,
            Err(never) => match never {},
        }
    }
}

impl Display for BrandFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandFilter::All => f.write_str(Self::ALL),
            BrandFilter::Brand(brand) => f.write_str(brand),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The fixture catalog a storefront variant ships with.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic | Variant::Showcase => Self::new(fixtures::classic_watches()),
            Variant::Boutique => Self::new(fixtures::boutique_watches()),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products whose brand equals the selector, or every product for `All`.
    pub fn filter_by_brand(&self, filter: &BrandFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Distinct brands in order of first appearance, for the filter buttons.
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();
        for product in &self.products {
            if !brands.contains(&product.brand.as_str()) {
                brands.push(&product.brand);
            }
        }
        brands
    }
}
