//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// `name` and `description` may be empty (the default menu carries several
/// image-only entries). `img` is never empty after creation — the catalog
/// substitutes a default image reference on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub img: String,
    pub price: f64,
    pub category: String,
}

/// Create product payload (no id — the catalog allocates one)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub description: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "crate::models::null_to_default")]
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_payload_accepts_explicit_nulls() {
        let draft: ProductCreate = serde_json::from_value(json!({
            "name": null,
            "description": null,
            "img": null,
            "price": null,
            "category": null
        }))
        .unwrap();

        assert_eq!(draft.name, "");
        assert!(draft.img.is_none());
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.category, "");
    }
}
