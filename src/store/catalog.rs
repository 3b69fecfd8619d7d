//! In-memory product catalog

use parking_lot::RwLock;

use super::IdAllocator;
use crate::models::{Product, ProductCreate};

/// Substituted when a draft arrives without an image reference
pub const DEFAULT_PRODUCT_IMAGE: &str = "/images/food1.png";

/// Catalog store — ordered product collection with an owned id allocator.
///
/// Insertion order is preserved; `list_all` hands out a point-in-time copy
/// that later mutations cannot touch.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
    ids: IdAllocator,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all products in insertion order
    pub fn list_all(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    /// Allocate an id, default the image reference if blank, append.
    pub fn create(&self, draft: ProductCreate) -> Product {
        let img = match draft.img {
            Some(img) if !img.is_empty() => img,
            _ => DEFAULT_PRODUCT_IMAGE.to_string(),
        };

        // Allocate inside the write lock so stored order matches id order.
        let mut products = self.products.write();
        let product = Product {
            id: self.ids.next_id(),
            name: draft.name,
            description: draft.description,
            img,
            price: draft.price,
            category: draft.category,
        };
        products.push(product.clone());
        product
    }

    /// Remove every product with the given id. 删除不存在的 id 视为成功。
    pub fn delete(&self, id: i64) {
        self.products.write().retain(|p| p.id != id);
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn draft(name: &str, img: &str, price: f64) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            description: String::new(),
            img: if img.is_empty() {
                None
            } else {
                Some(img.to_string())
            },
            price,
            category: "lunch".to_string(),
        }
    }

    #[test]
    fn create_allocates_increasing_ids() {
        let store = CatalogStore::new();
        let a = store.create(draft("a", "/images/a.png", 1.0));
        let b = store.create(draft("b", "/images/b.png", 2.0));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn blank_image_gets_default() {
        let store = CatalogStore::new();
        let p = store.create(draft("drink", "", 1.13));
        assert_eq!(p.img, DEFAULT_PRODUCT_IMAGE);

        // explicit empty string behaves the same as absent
        let p = store.create(ProductCreate {
            img: Some(String::new()),
            ..ProductCreate::default()
        });
        assert_eq!(p.img, DEFAULT_PRODUCT_IMAGE);
    }

    #[test]
    fn non_blank_image_is_preserved() {
        let store = CatalogStore::new();
        let p = store.create(draft("soup", "/images/soup.png", 4.5));
        assert_eq!(p.img, "/images/soup.png");
    }

    #[test]
    fn delete_is_idempotent() {
        let store = CatalogStore::new();
        let p = store.create(draft("a", "/images/a.png", 1.0));

        store.delete(p.id);
        assert!(store.list_all().iter().all(|x| x.id != p.id));

        // second delete of the same id, and a never-created id: both no-ops
        store.delete(p.id);
        store.delete(9999);
        assert!(store.is_empty());
    }

    #[test]
    fn list_preserves_insertion_order_across_deletes() {
        let store = CatalogStore::new();
        let a = store.create(draft("a", "/images/a.png", 1.0));
        let b = store.create(draft("b", "/images/b.png", 2.0));
        let c = store.create(draft("c", "/images/c.png", 3.0));

        store.delete(b.id);
        let names: Vec<_> = store.list_all().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["a", "c"]);

        let ids: Vec<_> = store.list_all().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let store = CatalogStore::new();
        store.create(draft("a", "/images/a.png", 1.0));

        let snapshot = store.list_all();
        store.create(draft("b", "/images/b.png", 2.0));
        store.delete(1);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "a");
    }

    #[test]
    fn concurrent_creates_allocate_distinct_ids() {
        let store = Arc::new(CatalogStore::new());
        let mut handles = Vec::new();
        for t in 0..8 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                (0..50)
                    .map(|i| store.create(draft(&format!("p-{t}-{i}"), "", 1.0)).id)
                    .collect::<Vec<_>>()
            }));
        }

        let mut ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 400);
        assert_eq!(store.len(), 400);

        // stored order matches allocation order
        let listed: Vec<i64> = store.list_all().into_iter().map(|p| p.id).collect();
        assert!(listed.windows(2).all(|w| w[0] < w[1]));
    }
}
