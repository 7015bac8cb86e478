//! Product Catalog Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod draft;
mod format;
mod generation;
mod logger;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::LOG_LEVEL);
    log::info!("product API at {}", config::API_BASE);
    mount_to_body(App);
}
