//! Catalog Frontend App
//!
//! Application shell: owns all state, runs the API actions, and composes
//! the search bar, form, and product list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{NoticeBanner, ProductForm, ProductList, SearchBar};
use crate::context::AppContext;
use crate::draft::ProductPayload;
use crate::models::{FilterState, Product, SortKey};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store);

    // Filter state
    let name_term = RwSignal::new(String::new());
    let category_term = RwSignal::new(String::new());
    let (sort_key, set_sort_key) = signal(SortKey::Default);

    // Full listing on mount and whenever the sort key changes.
    // Search terms are not applied here: sorting and searching are
    // separate view modes.
    Effect::new(move |_| {
        let sort = sort_key.get();
        actions::fetch_all(ctx, sort);
    });

    let on_search = move |_: ()| {
        let filter = FilterState {
            name: name_term.get_untracked(),
            category: category_term.get_untracked(),
            sort: sort_key.get_untracked(),
        };
        actions::search(ctx, &filter);
    };

    let on_clear = move |_: ()| {
        name_term.set(String::new());
        category_term.set(String::new());
        actions::fetch_all(ctx, sort_key.get_untracked());
    };

    let on_submit = move |payload: ProductPayload| match store.editing().get_untracked() {
        Some(product) => actions::submit_update(ctx, product.id, payload),
        None => actions::submit_create(ctx, payload),
    };

    view! {
        <div class="app">
            <div class="container">
                <header class="header">
                    <h1>"Product Management System"</h1>
                    <p>"Manage your products with ease"</p>
                </header>

                <NoticeBanner
                    kind="alert-error"
                    message=Signal::derive(move || store.error().get())
                    on_dismiss=move |_| ctx.dismiss_notices()
                />
                <NoticeBanner
                    kind="alert-success"
                    message=Signal::derive(move || store.success().get())
                    on_dismiss=move |_| ctx.dismiss_notices()
                />

                <SearchBar
                    name_term=name_term
                    category_term=category_term
                    sort_key=sort_key
                    on_search=on_search
                    on_sort_change=move |key| set_sort_key.set(key)
                    on_clear=on_clear
                />

                <div class="list-header">
                    <h2>{move || format!("Products ({})", store.products().with(|items| items.len()))}</h2>
                    <button class="btn btn-success" on:click=move |_| ctx.open_form(None)>
                        "Add New Product"
                    </button>
                </div>

                // Rebuilt whenever the edit target changes, reseeding the draft
                <Show when=move || store.show_form().get()>
                    {move || view! {
                        <ProductForm
                            editing=store.editing().get()
                            on_submit=on_submit
                            on_cancel=move |_| ctx.close_form()
                        />
                    }}
                </Show>

                <Show
                    when=move || !store.loading().get()
                    fallback=|| view! { <div class="loading">"Loading products..."</div> }
                >
                    <ProductList
                        products=Signal::derive(move || store.products().get())
                        on_edit=move |product: Product| ctx.open_form(Some(product))
                        on_delete=move |id: String| actions::delete_one(ctx, id)
                    />
                </Show>
            </div>
        </div>
    }
}
