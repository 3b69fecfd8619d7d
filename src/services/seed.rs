//! Default menu installation
//!
//! The storefront ships with a fixed menu so a fresh instance has something
//! to sell. Entries past the first four are image-only (no name or
//! description) — the frontend renders them from the image alone.

use crate::models::ProductCreate;
use crate::store::CatalogStore;

/// (name, description, img, price, category)
const DEFAULT_MENU: &[(&str, &str, &str, f64, &str)] = &[
    (
        "Breakfast Special",
        "Fresh eggs, bacon, toast...",
        "/images/food1.png",
        12.99,
        "breakfast",
    ),
    (
        "Lunch Combo",
        "Grilled chicken salad...",
        "/images/food2.png",
        15.99,
        "lunch",
    ),
    (
        "Dinner Delight",
        "Premium steak...",
        "/images/food3.png",
        24.99,
        "dinner",
    ),
    (
        "Sweet Pancakes",
        "Fluffy pancakes...",
        "/images/food1.png",
        9.99,
        "breakfast",
    ),
    ("", "", "/images/drink1.png", 1.13, "drinks"),
    ("", "", "/images/drink2.png", 2.50, "drinks"),
    ("", "", "/images/lunch1.png", 23.75, "lunch"),
    ("", "", "/images/lunch2.png", 45.00, "lunch"),
    ("", "", "/images/lunch3.png", 67.89, "lunch"),
    ("", "", "/images/dinner1.png", 34.56, "dinner"),
    ("", "", "/images/dinner2.png", 78.90, "dinner"),
    ("", "", "/images/dinner3.png", 90.12, "dinner"),
    ("", "", "/images/dinner4.png", 30.10, "dinner"),
    ("", "", "/images/dessert1.png", 11.11, "desserts"),
    ("", "", "/images/dessert2.png", 22.22, "desserts"),
    ("", "", "/images/dessert3.png", 33.33, "desserts"),
    ("", "", "/images/dessert4.png", 44.44, "desserts"),
    ("", "", "/images/breakfast1.png", 55.55, "breakfast"),
    ("", "", "/images/breakfast2.png", 66.66, "breakfast"),
    ("", "", "/images/breakfast3.png", 77.77, "breakfast"),
    ("", "", "/images/breakfast4.png", 88.88, "breakfast"),
];

/// Install the default menu into an empty catalog. No-op otherwise.
pub fn install_default_menu(catalog: &CatalogStore) {
    if !catalog.is_empty() {
        return;
    }

    for (name, description, img, price, category) in DEFAULT_MENU {
        catalog.create(ProductCreate {
            name: (*name).to_string(),
            description: (*description).to_string(),
            img: Some((*img).to_string()),
            price: *price,
            category: (*category).to_string(),
        });
    }

    tracing::info!(count = catalog.len(), "Default menu installed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installs_full_menu_with_sequential_ids() {
        let catalog = CatalogStore::new();
        install_default_menu(&catalog);

        let products = catalog.list_all();
        assert_eq!(products.len(), 21);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Breakfast Special");
        assert_eq!(products[20].id, 21);
        assert_eq!(products[20].img, "/images/breakfast4.png");
    }

    #[test]
    fn does_not_reseed_a_populated_catalog() {
        let catalog = CatalogStore::new();
        install_default_menu(&catalog);
        install_default_menu(&catalog);
        assert_eq!(catalog.len(), 21);
    }
}
