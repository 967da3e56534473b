use timepiece_store::catalog::BrandFilter;
use timepiece_store::framework::ActorClient;
use timepiece_store::lifecycle::StorefrontSystem;
use timepiece_store::model::{Money, PricingPolicy, ProductId};
use timepiece_store::storefront::{StorefrontConfig, Variant};

/// Full end-to-end run through the storefront system.
#[tokio::test]
async fn test_full_storefront_integration() {
    let system = StorefrontSystem::new(StorefrontConfig::for_variant(Variant::Boutique));

    assert_eq!(system.visible_products(&BrandFilter::All).len(), 6);
    assert_eq!(system.visible_products(&"CITIZEN".into()).len(), 2);
    assert!(system.visible_products(&"ROLEX".into()).is_empty());

    let session = system
        .cart_client
        .open_cart(Some("alice".into()))
        .await
        .expect("Failed to open cart");

    // List-price policy: the 15% discount on product 1 does not reach the cart.
    system.cart_client.add_to_cart(session, ProductId(1)).await.unwrap();
    let summary = system.cart_client.add_to_cart(session, ProductId(1)).await.unwrap();
    assert_eq!(summary.total, Money::new(250000));

    system.cart_client.add_to_cart(session, ProductId(6)).await.unwrap();
    let summary = system
        .cart_client
        .remove_from_cart(session, ProductId(1))
        .await
        .unwrap();
    assert_eq!(summary.item_count, 1);
    assert_eq!(summary.total, Money::new(67000));

    let summary = system.cart_client.clear_cart(session).await.unwrap();
    assert!(summary.is_empty());

    system.cart_client.close(session).await.unwrap();
    assert!(system.cart_client.get(session).await.unwrap().is_none());

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_brand_filter_disabled_shows_everything() {
    let system = StorefrontSystem::new(StorefrontConfig::for_variant(Variant::Classic));
    assert_eq!(system.visible_products(&"SEIKO".into()).len(), 3);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_discounted_config_applies_to_every_session() {
    let config = StorefrontConfig::builder(Variant::Boutique)
        .pricing(PricingPolicy::Discounted)
        .build()
        .unwrap();
    let system = StorefrontSystem::new(config);

    let first = system.cart_client.open_cart(None).await.unwrap();
    let second = system.cart_client.open_cart(None).await.unwrap();

    let a = system.cart_client.add_to_cart(first, ProductId(6)).await.unwrap();
    let b = system.cart_client.add_to_cart(second, ProductId(6)).await.unwrap();
    assert_eq!(a.total, Money::new(53600));
    assert_eq!(b.total, Money::new(53600));

    system.shutdown().await.unwrap();
}

/// Concurrent shoppers must never see each other's carts.
#[tokio::test]
async fn test_concurrent_sessions_are_isolated() {
    let system = StorefrontSystem::new(StorefrontConfig::for_variant(Variant::Classic));

    let mut handles = vec![];
    for shopper in 0..10u32 {
        let client = system.cart_client.clone();
        handles.push(tokio::spawn(async move {
            let session = client.open_cart(Some(format!("shopper_{shopper}"))).await?;
            let adds = shopper % 3 + 1;
            for _ in 0..adds {
                client.add_to_cart(session, ProductId(2)).await?;
            }
            let count = client.cart_item_count(session).await?;
            Ok::<_, timepiece_store::cart_actor::CartError>((u64::from(adds), count))
        }));
    }

    for handle in handles {
        let (expected, count) = handle.await.unwrap().unwrap();
        assert_eq!(count, expected, "Each session should only see its own adds");
    }

    system.shutdown().await.unwrap();
}
