//! Product Form Component
//!
//! Modal form for creating or editing one product. Holds a draft of the
//! typed values, validates on submit, and hands a normalized payload up.

use leptos::html;
use leptos::prelude::*;

use crate::draft::{Field, FieldErrors, ProductDraft, ProductPayload};
use crate::models::Product;

#[component]
pub fn ProductForm(
    /// Product to edit; `None` opens the form in create mode
    editing: Option<Product>,
    #[prop(into)] on_submit: Callback<ProductPayload>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = editing.is_some();
    let draft = RwSignal::new(ProductDraft::from_product(editing.as_ref()));
    let errors = RwSignal::new(FieldErrors::default());
    let image_input = NodeRef::<html::Input>::new();

    // Typing into a field clears only that field's message
    let edit_field = move |field: Field, value: String| {
        draft.update(|d| d.set(field, value));
        errors.update(|e| e.clear(field));
    };
    let value_of = move |field: Field| move || draft.with(|d| d.get(field).to_string());
    let error_for = move |field: Field| {
        move || {
            errors.with(|e| {
                e.get(field)
                    .map(|msg| view! { <div class="field-error">{msg.to_string()}</div> })
            })
        }
    };

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.with(ProductDraft::validate) {
            Ok(fields) => {
                let image = image_input
                    .get()
                    .and_then(|input| input.files())
                    .and_then(|files| files.get(0));
                on_submit.run(ProductPayload::new(fields, image));
            }
            Err(found) => {
                log::debug!("form rejected with {} field errors", found.len());
                errors.set(found);
            }
        }
    };

    view! {
        <div class="modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h2 class="modal-title">
                        {if is_edit { "Edit Product" } else { "Add New Product" }}
                    </h2>
                    <button class="close-btn" on:click=move |_| on_cancel.run(())>"×"</button>
                </div>

                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label for="name">"Product Name *"</label>
                        <input
                            type="text"
                            id="name"
                            class="form-control"
                            placeholder="Enter product name"
                            prop:value=value_of(Field::Name)
                            on:input=move |ev| edit_field(Field::Name, event_target_value(&ev))
                        />
                        {error_for(Field::Name)}
                    </div>

                    <div class="form-group">
                        <label for="price">"Price *"</label>
                        <input
                            type="number"
                            id="price"
                            class="form-control"
                            placeholder="Enter price"
                            step="0.01"
                            min="0"
                            prop:value=value_of(Field::Price)
                            on:input=move |ev| edit_field(Field::Price, event_target_value(&ev))
                        />
                        {error_for(Field::Price)}
                    </div>

                    <div class="form-group">
                        <label for="category">"Category *"</label>
                        <input
                            type="text"
                            id="category"
                            class="form-control"
                            placeholder="Enter category"
                            prop:value=value_of(Field::Category)
                            on:input=move |ev| edit_field(Field::Category, event_target_value(&ev))
                        />
                        {error_for(Field::Category)}
                    </div>

                    <div class="form-group">
                        <label for="description">"Description *"</label>
                        <textarea
                            id="description"
                            class="form-control"
                            placeholder="Enter product description"
                            rows="4"
                            prop:value=value_of(Field::Description)
                            on:input=move |ev| edit_field(Field::Description, event_target_value(&ev))
                        />
                        {error_for(Field::Description)}
                    </div>

                    <div class="form-group">
                        <label for="image">"Image (optional)"</label>
                        <input
                            type="file"
                            id="image"
                            class="form-control"
                            accept="image/*"
                            node_ref=image_input
                        />
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-success">
                            {if is_edit { "Update Product" } else { "Add Product" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
