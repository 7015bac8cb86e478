//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Product;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last server listing plus any optimistic patches since
    pub products: Vec<Product>,
    /// A listing or search is in flight
    pub loading: bool,
    /// Error banner text
    pub error: Option<String>,
    /// Success banner text
    pub success: Option<String>,
    /// Product form is open
    pub show_form: bool,
    /// Product being edited (None = creating a new one)
    pub editing: Option<Product>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Collection Patches
// ========================

/// Append a newly created product
pub fn add_product(products: &mut Vec<Product>, product: Product) {
    products.push(product);
}

/// Swap in the updated record with the same id, bumping its image revision
/// when a new image was uploaded. Returns false when absent.
pub fn replace_product(products: &mut [Product], updated: Product, new_image: bool) -> bool {
    match products.iter_mut().find(|p| p.id == updated.id) {
        Some(slot) => {
            let image_revision = if new_image {
                slot.image_revision.wrapping_add(1)
            } else {
                slot.image_revision
            };
            *slot = Product {
                image_revision,
                ..updated
            };
            true
        }
        None => false,
    }
}

/// Drop the product with this id. Returns false when absent.
pub fn remove_product(products: &mut Vec<Product>, id: &str) -> bool {
    let before = products.len();
    products.retain(|p| p.id != id);
    products.len() != before
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_product(store: &AppStore, product: Product) {
    add_product(&mut store.products().write(), product);
}

pub fn store_update_product(store: &AppStore, updated: Product, new_image: bool) {
    if !replace_product(&mut store.products().write(), updated, new_image) {
        log::warn!("updated product is no longer in the list");
    }
}

pub fn store_remove_product(store: &AppStore, id: &str) {
    remove_product(&mut store.products().write(), id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            category: "Stationery".to_string(),
            description: "Something to write with".to_string(),
            image_revision: 0,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![product("a", 1.0), product("b", 2.0), product("c", 3.0)]
    }

    #[test]
    fn test_create_adds_exactly_one() {
        let mut products = catalog();
        add_product(&mut products, product("d", 4.0));
        assert_eq!(products.len(), 4);
        assert_eq!(products.iter().filter(|p| p.id == "d").count(), 1);
        assert_eq!(products.last().map(|p| p.id.as_str()), Some("d"));
    }

    #[test]
    fn test_update_replaces_only_target() {
        let mut products = catalog();
        let mut updated = product("b", 20.0);
        updated.name = "Renamed".to_string();

        assert!(replace_product(&mut products, updated.clone(), false));
        assert_eq!(products.len(), 3);
        assert_eq!(products[1], updated);
        assert_eq!(products[0], product("a", 1.0));
        assert_eq!(products[2], product("c", 3.0));
    }

    #[test]
    fn test_update_of_missing_id_changes_nothing() {
        let mut products = catalog();
        assert!(!replace_product(&mut products, product("zz", 9.0), true));
        assert_eq!(products, catalog());
    }

    #[test]
    fn test_image_upload_bumps_revision() {
        let mut products = catalog();
        let before = products[1].render_key();

        assert!(replace_product(&mut products, product("b", 2.0), true));
        assert_eq!(products[1].image_revision, 1);
        assert_ne!(products[1].render_key(), before);

        // a fields-only update keeps the revision it already had
        assert!(replace_product(&mut products, product("b", 2.5), false));
        assert_eq!(products[1].image_revision, 1);
        assert_eq!(products[1].price, 2.5);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut products = catalog();
        assert!(remove_product(&mut products, "b"));
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.id != "b"));

        assert!(!remove_product(&mut products, "b"));
        assert_eq!(products.len(), 2);
    }
}
