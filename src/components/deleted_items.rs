//! Deleted Items Panel
//!
//! Collapsible list of soft-deleted items of one scope with a restore button
//! per item. A restored item goes back to the end of its list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reorder_core::{Orderable, ScopeKey};

use crate::commands::{self, Resource};
use crate::context::use_app_context;
use crate::models::Named;
use crate::store::{store_begin_request, store_end_request, store_show_error, use_ui_store};

#[component]
pub fn DeletedItems<R: Resource>(api: R, #[prop(into)] scope: Signal<Option<ScopeKey>>) -> impl IntoView {
    let _ = api;
    let ctx = use_app_context();
    let store = use_ui_store();
    let (open, set_open) = signal(false);
    let deleted = RwSignal::new(Vec::<R::Item>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(scope) = scope.get() else {
            deleted.set(Vec::new());
            return;
        };
        if !open.get() {
            return;
        }
        spawn_local(async move {
            match commands::list_deleted_items::<R>(&scope).await {
                Ok(items) => deleted.set(items),
                Err(e) => web_sys::console::error_1(&format!("[DELETED] load {} failed: {}", scope, e).into()),
            }
        });
    });

    let restore = move |item_id: String| {
        let Some(scope) = scope.get_untracked() else {
            return;
        };
        spawn_local(async move {
            store_begin_request(&store, &scope);
            let result = commands::restore_item::<R>(&item_id).await;
            store_end_request(&store, &scope);
            match result {
                Ok(()) => ctx.reload(),
                Err(e) => store_show_error(&store, e),
            }
        });
    };

    view! {
        <div class="deleted-items">
            <button class="deleted-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || if open.get() { "Hide deleted" } else { "Show deleted" }}
            </button>
            <Show when=move || open.get()>
                <ul class="deleted-list">
                    <For
                        each=move || deleted.get()
                        key=|item| item.item_id().to_string()
                        children=move |item| {
                            let id = item.item_id().to_string();
                            let name = item.display_name().to_string();
                            view! {
                                <li class="deleted-row">
                                    <span class="deleted-name">{name}</span>
                                    <button class="restore-btn" on:click=move |_| restore(id.clone())>"Restore"</button>
                                </li>
                            }
                        }
                    />
                </ul>
                <Show when=move || deleted.with(Vec::is_empty)>
                    <p class="empty-hint">"Nothing deleted"</p>
                </Show>
            </Show>
        </div>
    }
}
