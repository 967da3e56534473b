//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. Every cart request
//! is logged by the actor with structured fields (`entity_type`, `id`, `size`), and the
//! client methods open a span per call.
//!
//! Levels come from `RUST_LOG`, falling back to `info`:
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! RUST_LOG=timepiece_store::framework=debug cargo run
//! ```
//!
//! At `info` a shopping session reads like:
//!
//! ```text
//! INFO Storefront started variant=classic products=3 pricing=ListPrice
//! INFO Opened entity_type="CartSession" id=session_1 size=1
//! INFO cart_session:add_to_cart: Action ok entity_type="CartSession" id=session_1
//! INFO Closed entity_type="CartSession" id=session_1 size=0
//! ```
//!
//! At `debug` the actor also prints each action payload (`action=Add(ProductId(1))`),
//! and closing a session logs what was left in the cart.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

pub fn setup_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .init();
}
