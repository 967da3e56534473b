use crate::cart_actor::{self, CartContext};
use crate::catalog::{BrandFilter, Catalog};
use crate::clients::CartClient;
use crate::model::Product;
use crate::storefront::StorefrontConfig;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime for one storefront page.
///
/// `StorefrontSystem` owns:
/// - **The catalog**: built from the variant's fixtures and shared read-only.
/// - **The cart actor**: one task holding every open cart session, with the catalog
///   and pricing policy injected as its context.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new(StorefrontConfig::default());
/// let session = system.cart_client.open_cart(None).await?;
/// system.cart_client.add_to_cart(session, ProductId(1)).await?;
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    pub catalog: Arc<Catalog>,

    pub config: StorefrontConfig,

    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Builds the catalog for `config.variant` and spawns the cart actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Arc::new(Catalog::for_variant(config.variant));
        let (cart_actor, cart_client) = cart_actor::new(config.session_buffer.max(1));

        let context = CartContext::new(catalog.clone(), config.pricing);
        let handle = tokio::spawn(cart_actor.run(context));

        info!(
            variant = %config.variant,
            products = catalog.len(),
            pricing = ?config.pricing,
            "Storefront started"
        );

        Self {
            cart_client,
            catalog,
            config,
            handle,
        }
    }

    /// The products the catalog section shows for `filter`.
    ///
    /// Variants without a brand filter always show the full list.
    pub fn visible_products(&self, filter: &BrandFilter) -> Vec<&Product> {
        if self.config.brand_filter {
            self.catalog.filter_by_brand(filter)
        } else {
            self.catalog.products().iter().collect()
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel; the actor drains, discards every open
    /// session, and its task finishes. Returns an error if that task panicked.
    ///
    /// Clones of `cart_client` handed out earlier keep the actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Cart actor task failed: {:?}", e);
            return Err(format!("Cart actor task failed: {:?}", e));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
