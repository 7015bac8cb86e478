//! Catalog Actions
//!
//! The shell's operations: each issues one API call and patches the store
//! with the outcome. Failures show one generic banner per action and log
//! the underlying cause.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError, ListQuery};
use crate::context::AppContext;
use crate::draft::ProductPayload;
use crate::models::{FilterState, Product, SortKey};
use crate::store::{self, AppState, AppStateStoreFields};

const FETCH_FAILED: &str = "Failed to fetch products. Please try again.";
const SEARCH_FAILED: &str = "Failed to search products. Please try again.";
const ADD_FAILED: &str = "Failed to add product. Please try again.";
const UPDATE_FAILED: &str = "Failed to update product. Please try again.";
const DELETE_FAILED: &str = "Failed to delete product. Please try again.";

const ADDED: &str = "Product added successfully!";
const UPDATED: &str = "Product updated successfully!";
const DELETED: &str = "Product deleted successfully!";

/// Reload the full listing in the given order
pub fn fetch_all(ctx: AppContext, sort: SortKey) {
    load(ctx, ListQuery::All { sort });
}

/// Run a search; blank terms fall back to the full listing
pub fn search(ctx: AppContext, filter: &FilterState) {
    load(ctx, ListQuery::search(filter));
}

fn load(ctx: AppContext, query: ListQuery) {
    let ticket = ctx.begin_request();
    ctx.store.loading().set(true);

    spawn_local(async move {
        let result = api::list_products(&query).await;
        let listing = Listing::settle(ctx.is_current(ticket), &query, result);
        if matches!(listing, Listing::Stale) {
            log::debug!("dropping superseded response for {:?}", query);
            return;
        }
        if let Some(message) = ctx.store.try_update(|state| listing.apply(state)).flatten() {
            ctx.show_error(message);
        }
    });
}

/// Outcome of a finished list request
#[derive(Debug)]
enum Listing {
    /// A newer request was issued since; leave everything alone
    Stale,
    Loaded(Vec<Product>),
    Failed(&'static str),
}

impl Listing {
    fn settle(current: bool, query: &ListQuery, result: Result<Vec<Product>, ApiError>) -> Self {
        if !current {
            return Listing::Stale;
        }
        match result {
            Ok(products) => {
                log::debug!("loaded {} products", products.len());
                Listing::Loaded(products)
            }
            Err(err) => {
                log::error!("listing failed for {:?}: {}", query, err);
                Listing::Failed(match query {
                    ListQuery::All { .. } => FETCH_FAILED,
                    ListQuery::Search { .. } => SEARCH_FAILED,
                })
            }
        }
    }

    /// Patch the state. A failure keeps the current collection and hands
    /// back the banner text to show.
    fn apply(self, state: &mut AppState) -> Option<&'static str> {
        match self {
            Listing::Stale => None,
            Listing::Loaded(products) => {
                state.products = products;
                state.error = None;
                state.loading = false;
                None
            }
            Listing::Failed(message) => {
                state.loading = false;
                Some(message)
            }
        }
    }
}

pub fn submit_create(ctx: AppContext, payload: ProductPayload) {
    spawn_local(async move {
        match api::create_product(&payload).await {
            Ok(created) => {
                log::info!("created product {}", created.id);
                store::store_add_product(&ctx.store, created);
                ctx.show_success(ADDED);
                ctx.close_form();
            }
            Err(err) => {
                log::error!("create failed: {}", err);
                ctx.show_error(ADD_FAILED);
            }
        }
    });
}

pub fn submit_update(ctx: AppContext, id: String, payload: ProductPayload) {
    spawn_local(async move {
        match api::update_product(&id, &payload).await {
            Ok(updated) => {
                log::info!("updated product {}", updated.id);
                store::store_update_product(&ctx.store, updated, payload.is_multipart());
                ctx.show_success(UPDATED);
                ctx.close_form();
            }
            Err(err) => {
                log::error!("update of {} failed: {}", id, err);
                ctx.show_error(UPDATE_FAILED);
            }
        }
    });
}

/// Delete a product. Callers confirm with the user first.
pub fn delete_one(ctx: AppContext, id: String) {
    spawn_local(async move {
        match api::delete_product(&id).await {
            Ok(()) => {
                log::info!("deleted product {}", id);
                store::store_remove_product(&ctx.store, &id);
                ctx.show_success(DELETED);
            }
            Err(err) => {
                log::error!("delete of {} failed: {}", id, err);
                ctx.show_error(DELETE_FAILED);
            }
        }
    });
}
