//! Delete Confirm Button Component
//!
//! Inline delete confirmation. While the confirmation is open the item is
//! recorded as pending delete, which locks its list against dragging.

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

/// Inline delete confirmation button
///
/// Shows a × button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
#[component]
pub fn DeleteConfirmButton(#[prop(into)] item_id: String, #[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let store = use_ui_store();
    let confirming = {
        let item_id = item_id.clone();
        move || store.pending_delete_id().with(|p| p.as_deref() == Some(item_id.as_str()))
    };
    let open = {
        let item_id = item_id.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            store.pending_delete_id().set(Some(item_id.clone()));
        }
    };
    let close = move || store.pending_delete_id().set(None);

    view! {
        <Show
            when=confirming
            fallback=move || view! { <button class="delete-btn" on:click=open.clone()>"×"</button> }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        close();
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        close();
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
