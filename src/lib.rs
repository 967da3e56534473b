//! # Timepiece Store
//!
//! > **The catalog and cart core behind the TIMEPIECE TOKYO storefront pages.**
//!
//! The storefront shows a fixed catalog of Japanese watches, lets a shopper collect
//! them in a cart, and keeps a running total. There is no persistence and no checkout:
//! a cart lives exactly as long as its session.
//!
//! ## 🏗️ Design
//!
//! ### One core, three pages
//! The classic, boutique and showcase pages differ only in data: which products they
//! list, which sections they render, whether they offer a brand filter. That is all
//! captured by [`StorefrontConfig`](storefront::StorefrontConfig).
//!
//! ### A pure reducer behind a session actor
//! [`Cart`](model::Cart) is a plain value with total, synchronous operations
//! (add-or-increment, remove, quantity adjust, total, count). To keep shoppers apart,
//! carts are not global: each one is a session inside a
//! [`SessionActor`](framework::SessionActor) that processes requests one at a time,
//! so no locks are involved.
//!
//! ### Snapshot pricing
//! A cart line copies the product's price when first added. Which price is copied
//! (list or discounted) is the storefront's [`PricingPolicy`](model::PricingPolicy).
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: products, money, the cart reducer and the cart session.
//! - [`catalog`]: fixture catalogs and the brand filter.
//! - [`storefront`]: variants, page sections and configuration.
//! - [`framework`]: the generic session actor, its client and test mocks.
//! - [`cart_actor`]: the cart's [`SessionEntity`](framework::SessionEntity) impl.
//! - [`clients`]: [`CartClient`](clients::CartClient), the typed API callers use.
//! - [`lifecycle`]: [`StorefrontSystem`](lifecycle::StorefrontSystem) and tracing setup.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info TIMEPIECE_VARIANT=boutique cargo run
//! cargo test
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod storefront;
