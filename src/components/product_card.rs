//! Product Card Component
//!
//! One product: price, category, description, and its image if the API has
//! one. Edit and delete are passed up to the shell.

use leptos::prelude::*;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::config::API_BASE;
use crate::format::format_price;
use crate::models::Product;

#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] on_edit: Callback<Product>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    // Products without an image answer 404; the element is dropped then.
    let (image_failed, set_image_failed) = signal(false);
    let has_id = !product.id.is_empty();
    let image_src = api::image_url(API_BASE, &product.id, product.image_revision);
    let image_alt = product.name.clone();

    let id = product.id.clone();
    let price = format_price(product.price);
    let name = product.name.clone();
    let category = product.category.clone();
    let description = product.description.clone();

    view! {
        <div class="card">
            <div class="card-header">
                <h3>{name}</h3>
                <span class="price">{price}</span>
            </div>
            <div class="card-body">
                <Show when=move || has_id && !image_failed.get()>
                    <div class="card-image">
                        <img
                            src=image_src.clone()
                            alt=image_alt.clone()
                            on:error=move |_| set_image_failed.set(true)
                        />
                    </div>
                </Show>
                <p><strong>"Category: "</strong>{category}</p>
                <p><strong>"Description: "</strong>{description}</p>
                <div class="card-actions">
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| on_edit.run(product.clone())
                    >
                        "Edit"
                    </button>
                    <DeleteConfirmButton
                        button_class="btn btn-danger"
                        on_confirm=move |_| on_delete.run(id.clone())
                    />
                </div>
            </div>
        </div>
    }
}
