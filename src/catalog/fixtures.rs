//! Literal product lists compiled into the crate.

use crate::model::Product;

const CDN: &str = "https://cdn.poehali.dev/projects/f7093d3a-57ba-4498-850a-54a1abf3cfc0/files";

fn cdn(file: &str) -> String {
    format!("{CDN}/{file}")
}

/// The three-watch lineup of the classic and showcase pages.
pub fn classic_watches() -> Vec<Product> {
    vec![
        Product::new(1, "Seiko Presage", "SEIKO", 125000)
            .with_image(cdn("7a60fdf3-26b8-4869-8b00-43b5052d9c6a.jpg"))
            .with_description("Автоматические часы с сапфировым стеклом"),
        Product::new(2, "Citizen Eco-Drive", "CITIZEN", 95000)
            .with_image(cdn("6508b97d-340c-4d61-b800-6cadde0ee5cd.jpg"))
            .with_description("Хронограф на солнечной батарее"),
        Product::new(3, "Orient Bambino", "ORIENT", 78000)
            .with_image(cdn("5436aa99-9aa9-4443-bf8b-c482215a6b2a.jpg"))
            .with_description("Классические часы с механизмом handwinding"),
    ]
}

/// The boutique page lineup: six watches with features, stock flags and discounts.
pub fn boutique_watches() -> Vec<Product> {
    vec![
        Product::new(1, "Seiko Presage", "SEIKO", 125000)
            .with_image(cdn("7a60fdf3-26b8-4869-8b00-43b5052d9c6a.jpg"))
            .with_description("Автоматические часы с сапфировым стеклом")
            .with_features(["Автоподзавод", "Сапфировое стекло", "Водозащита 50 м"])
            .with_stock(true)
            .with_discount(15),
        Product::new(2, "Citizen Eco-Drive", "CITIZEN", 95000)
            .with_image(cdn("6508b97d-340c-4d61-b800-6cadde0ee5cd.jpg"))
            .with_description("Хронограф на солнечной батарее")
            .with_features(["Eco-Drive", "Хронограф", "Водозащита 100 м"])
            .with_stock(true),
        Product::new(3, "Orient Bambino", "ORIENT", 78000)
            .with_image(cdn("5436aa99-9aa9-4443-bf8b-c482215a6b2a.jpg"))
            .with_description("Классические часы с механизмом handwinding")
            .with_features(["Ручной завод", "Выпуклое стекло"])
            .with_stock(true),
        Product::new(4, "Seiko Prospex", "SEIKO", 142000)
            .with_image("/images/seiko-prospex.jpg")
            .with_description("Дайверские часы с керамическим безелем")
            .with_features(["Автоподзавод", "Водозащита 200 м", "Люминесцентные метки"])
            .with_stock(true)
            .with_discount(10),
        Product::new(5, "Casio Oceanus", "CASIO", 189000)
            .with_image("/images/casio-oceanus.jpg")
            .with_description("Титановый корпус и радиосинхронизация времени")
            .with_features(["Tough Solar", "Bluetooth", "Титан"])
            .with_stock(false),
        Product::new(6, "Citizen Promaster", "CITIZEN", 67000)
            .with_image("/images/citizen-promaster.jpg")
            .with_description("Надёжные часы для активного отдыха")
            .with_features(["Eco-Drive", "Водозащита 200 м"])
            .with_stock(true)
            .with_discount(20),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique() {
        for products in [classic_watches(), boutique_watches()] {
            let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), products.len());
        }
    }

    #[test]
    fn test_boutique_presage_is_discounted() {
        let presage = &boutique_watches()[0];
        assert_eq!(presage.price.amount(), 125000);
        assert_eq!(presage.discount, Some(15));
    }
}
