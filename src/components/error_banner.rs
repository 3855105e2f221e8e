//! Error Banner Component

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

/// Inline banner for failed reorders and mutations; dismissed by click
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <Show when=move || store.error().with(Option::is_some)>
            <div class="error-banner" role="alert">
                <span class="error-text">{move || store.error().get().unwrap_or_default()}</span>
                <button class="error-dismiss" on:click=move |_| store.error().set(None)>"×"</button>
            </div>
        </Show>
    }
}
