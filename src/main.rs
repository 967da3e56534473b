//! Demo shopping session against the configured storefront variant.
//!
//! Reads `TIMEPIECE_CONFIG` / `TIMEPIECE_VARIANT`, opens a cart, and walks through
//! adding, adjusting and removing watches while logging the cart after each step.

use timepiece_store::catalog::BrandFilter;
use timepiece_store::lifecycle::{setup_tracing, StorefrontSystem};
use timepiece_store::model::{CartSummary, ProductId};
use timepiece_store::storefront::StorefrontConfig;
use tracing::{info, Instrument};

fn log_cart(step: &str, summary: &CartSummary) {
    for line in &summary.lines {
        info!(
            product = %line.name,
            quantity = line.quantity,
            line_total = %line.line_total(),
            "Cart line"
        );
    }
    info!(step, items = summary.item_count, total = %summary.total, "Cart");
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    let system = StorefrontSystem::new(config);

    let span = tracing::info_span!("catalog");
    async {
        for section in &system.config.sections {
            info!(anchor = section.anchor(), title = section.title(), "Section");
        }
        let filters = std::iter::once(BrandFilter::All)
            .chain(system.catalog.brands().into_iter().map(BrandFilter::from));
        for filter in filters {
            let products = system.visible_products(&filter);
            info!(%filter, count = products.len(), "Catalog view");
        }
        for product in system.catalog.products() {
            info!(
                id = %product.id,
                name = %product.name,
                price = %product.price,
                discounted = %product.discounted_price(),
                "Product"
            );
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("cart_session");
    let cart = system.cart_client.clone();
    async move {
        let session = cart
            .open_cart(Some("demo".to_string()))
            .await
            .map_err(|e| e.to_string())?;
        info!(%session, "Cart opened");

        cart.add_to_cart(session, ProductId(1)).await.map_err(|e| e.to_string())?;
        cart.add_to_cart(session, ProductId(2)).await.map_err(|e| e.to_string())?;
        let summary = cart
            .add_to_cart(session, ProductId(1))
            .await
            .map_err(|e| e.to_string())?;
        log_cart("added", &summary);

        let summary = cart
            .update_quantity(session, ProductId(2), -1)
            .await
            .map_err(|e| e.to_string())?;
        log_cart("decremented", &summary);

        let summary = cart
            .remove_from_cart(session, ProductId(1))
            .await
            .map_err(|e| e.to_string())?;
        log_cart("removed", &summary);

        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
