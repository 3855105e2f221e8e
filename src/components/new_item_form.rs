//! New Item Form Component
//!
//! Form for appending an item to a list, with an optional checklist type
//! selector.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reorder_core::{ChecklistKind, NewItem, ScopeKey};
use wasm_bindgen::JsCast;

use crate::commands::{self, Resource};
use crate::context::use_app_context;
use crate::store::{store_begin_request, store_end_request, store_show_error, use_ui_store};

/// Checklist type options
const CHECKLIST_TYPES: &[(ChecklistKind, &str)] = &[
    (ChecklistKind::Status, "Status"),
    (ChecklistKind::Information, "Information"),
];

/// Form for creating new items at the end of `scope`'s list
#[component]
pub fn NewItemForm<R: Resource>(
    api: R,
    #[prop(into)] scope: Signal<Option<ScopeKey>>,
    #[prop(into)] placeholder: String,
    /// Show the status / information selector
    #[prop(optional)]
    with_type: bool,
) -> impl IntoView {
    let _ = api;
    let ctx = use_app_context();
    let store = use_ui_store();

    let (new_name, set_new_name) = signal(String::new());
    let (kind, set_kind) = signal(ChecklistKind::Status);

    let create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() {
            return;
        }
        let Some(scope) = scope.get_untracked() else {
            return;
        };
        let fields = if with_type {
            NewItem::checklist(name, kind.get_untracked())
        } else {
            NewItem::named(name)
        };

        spawn_local(async move {
            store_begin_request(&store, &scope);
            let result = commands::create_item::<R>(&scope, &fields).await;
            store_end_request(&store, &scope);
            match result {
                Ok(_) => {
                    set_new_name.set(String::new());
                    ctx.reload();
                }
                Err(e) => store_show_error(&store, e),
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || new_name.get()
                    on:input=move |ev| {
                        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                            set_new_name.set(input.value());
                        }
                    }
                    disabled=move || scope.with(Option::is_none)
                />
                <button type="submit" disabled=move || scope.with(Option::is_none)>"Add"</button>
            </div>

            <Show when=move || with_type>
                <div class="type-selector-row">
                    {CHECKLIST_TYPES.iter().map(|(value, label)| {
                        let value = *value;
                        view! {
                            <button
                                type="button"
                                class="type-btn"
                                class:selected=move || kind.get() == value
                                on:click=move |_| set_kind.set(value)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </form>
    }
}
