//! Notice Banner Component

use leptos::prelude::*;

/// Dismissible alert shown while `message` is set
#[component]
pub fn NoticeBanner(
    /// Extra CSS class, e.g. "alert-error"
    kind: &'static str,
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class=format!("alert {}", kind)>
                    {text}
                    <button class="alert-dismiss" on:click=move |_| on_dismiss.run(())>"×"</button>
                </div>
            }
        })
    }
}
