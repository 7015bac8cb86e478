//! Frontend Models
//!
//! Data structures matching the product API.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Product record (matches backend). Image bytes are served separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    /// Local count of image uploads since the last listing
    #[serde(skip)]
    pub image_revision: u32,
}

impl Product {
    /// List key: the id plus a digest of the record, so a card is rebuilt
    /// when its record or image is replaced in place.
    pub fn render_key(&self) -> (String, u64) {
        let mut hasher = DefaultHasher::new();
        self.image_revision.hash(&mut hasher);
        self.name.hash(&mut hasher);
        self.price.to_bits().hash(&mut hasher);
        self.category.hash(&mut hasher);
        self.description.hash(&mut hasher);
        (self.id.clone(), hasher.finish())
    }
}

/// Validated, trimmed product fields sent on create/update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category: String,
}

/// List ordering understood by the API's `sort` parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Default,
    PriceAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Default, SortKey::PriceAsc];

    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Default => "",
            SortKey::PriceAsc => "price",
        }
    }

    /// Unknown values fall back to the default ordering
    pub fn from_param(value: &str) -> Self {
        match value {
            "price" => SortKey::PriceAsc,
            _ => SortKey::Default,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::PriceAsc => "Price (Low to High)",
        }
    }
}

/// Search bar values at the moment a search is submitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub name: String,
    pub category: String,
    pub sort: SortKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Pen".to_string(),
            price: 5.0,
            category: "Stationery".to_string(),
            description: "A basic pen".to_string(),
            image_revision: 0,
        }
    }

    #[test]
    fn test_product_ignores_unknown_fields() {
        let json = r#"{"id":"abc","name":"Pen","price":5.5,"category":"Stationery",
            "description":"A basic pen","image":"AAEC","imageContentType":"image/png"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "abc");
        assert_eq!(product.price, 5.5);
        assert_eq!(product.image_revision, 0);
    }

    #[test]
    fn test_render_key_changes_with_content() {
        let original = pen();
        let mut repriced = pen();
        repriced.price = 6.0;
        assert_eq!(original.render_key(), pen().render_key());
        assert_eq!(original.render_key().0, repriced.render_key().0);
        assert_ne!(original.render_key(), repriced.render_key());

        let mut new_image = pen();
        new_image.image_revision = 1;
        assert_ne!(original.render_key(), new_image.render_key());
    }

    #[test]
    fn test_sort_key_params() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_param(key.as_param()), key);
        }
        assert_eq!(SortKey::from_param("name"), SortKey::Default);
    }
}
