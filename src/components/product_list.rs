//! Product List Component

use leptos::prelude::*;

use crate::components::ProductCard;
use crate::models::Product;

/// Grid of product cards, or an empty-state message
#[component]
pub fn ProductList(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] on_edit: Callback<Product>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || products.with(|items| !items.is_empty())
            fallback=|| view! {
                <div class="empty-state">
                    <h3>"No products found"</h3>
                    <p>"Add your first product to get started!"</p>
                </div>
            }
        >
            <div class="grid">
                <For
                    each=move || products.get()
                    key=|product| product.render_key()
                    children=move |product| {
                        view! {
                            <ProductCard product=product on_edit=on_edit on_delete=on_delete />
                        }
                    }
                />
            </div>
        </Show>
    }
}
