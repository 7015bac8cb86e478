//! Search Bar Component
//!
//! Controlled name/category filters and the sort selector. The terms live
//! in the shell; this component only edits them and reports events.

use leptos::prelude::*;

use crate::models::SortKey;

#[component]
pub fn SearchBar(
    name_term: RwSignal<String>,
    category_term: RwSignal<String>,
    sort_key: ReadSignal<SortKey>,
    /// Search form submitted
    #[prop(into)] on_search: Callback<()>,
    /// Sort selection changed; fires immediately, no submit needed
    #[prop(into)] on_sort_change: Callback<SortKey>,
    /// Clear pressed
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(());
    };

    view! {
        <div class="search-bar">
            <form on:submit=on_submit>
                <div class="search-controls">
                    <div class="form-group">
                        <label for="search">"Search by Name"</label>
                        <input
                            type="text"
                            id="search"
                            class="form-control"
                            placeholder="Enter product name..."
                            prop:value=move || name_term.get()
                            on:input=move |ev| name_term.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="category-filter">"Filter by Category"</label>
                        <input
                            type="text"
                            id="category-filter"
                            class="form-control"
                            placeholder="Enter category..."
                            prop:value=move || category_term.get()
                            on:input=move |ev| category_term.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="sort">"Sort by"</label>
                        <select
                            id="sort"
                            class="form-control"
                            prop:value=move || sort_key.get().as_param()
                            on:change=move |ev| on_sort_change.run(SortKey::from_param(&event_target_value(&ev)))
                        >
                            {SortKey::ALL.iter().map(|key| {
                                let key = *key;
                                view! {
                                    <option value=key.as_param() selected=move || sort_key.get() == key>
                                        {key.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-group search-actions">
                        <button type="submit" class="btn">"Search"</button>
                        <button type="button" class="btn btn-secondary" on:click=move |_| on_clear.run(())>
                            "Clear"
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
