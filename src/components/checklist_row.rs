//! Checklist Row Component
//!
//! One checklist item: drag handle, name, autosaved comment / location /
//! answer fields and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_handle_mousedown, make_on_item_mouseenter, SortableSignals};
use reorder_core::{FieldPatch, ReorderGuard, ScopeKey};

use crate::commands::{self, ChecklistsApi};
use crate::components::{AutosaveField, DeleteConfirmButton, RenameInput, TrackedField};
use crate::context::use_app_context;
use crate::models::Checklist;
use crate::store::{store_begin_request, store_end_request, store_show_error, use_ui_store, UiStateStoreFields};

#[component]
pub fn ChecklistRow(
    #[prop(into)] item_id: String,
    scope: ScopeKey,
    /// Full checklist list of the subsection; row fields are read from it
    items: RwSignal<Vec<Checklist>>,
    sortable: SortableSignals,
    guard: Memo<ReorderGuard>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let locked = Signal::derive(move || guard.with(|g| g.is_engaged()));

    let field = {
        let item_id = item_id.clone();
        move |read: fn(&Checklist) -> Option<String>| {
            let item_id = item_id.clone();
            Signal::derive(move || {
                items.with(|all| all.iter().find(|c| c.id == item_id).and_then(read).unwrap_or_default())
            })
        }
    };
    let name = field(|c| Some(c.name.clone()));
    let comment = field(|c| c.comment.clone());
    let location = field(|c| c.location.clone());
    let answer = field(|c| c.answer.clone());

    let is_editing = {
        let item_id = item_id.clone();
        Signal::derive(move || store.editing_id().with(|e| e.as_deref() == Some(item_id.as_str())))
    };

    let mutation_scope = scope.clone();
    let rename = {
        let item_id = item_id.clone();
        move |new_name: String| {
            let item_id = item_id.clone();
            let scope = mutation_scope.clone();
            spawn_local(async move {
                store_begin_request(&store, &scope);
                let patch = FieldPatch {
                    name: Some(new_name),
                    ..Default::default()
                };
                let result = commands::update_item::<ChecklistsApi>(&item_id, &patch).await;
                store_end_request(&store, &scope);
                match result {
                    Ok(_) => ctx.reload(),
                    Err(e) => store_show_error(&store, e),
                }
            });
        }
    };

    let delete = {
        let item_id = item_id.clone();
        move |_: ()| {
            let item_id = item_id.clone();
            let scope = scope.clone();
            spawn_local(async move {
                store_begin_request(&store, &scope);
                let result = commands::delete_item::<ChecklistsApi>(&item_id).await;
                store_end_request(&store, &scope);
                match result {
                    Ok(()) => ctx.reload(),
                    Err(e) => store_show_error(&store, e),
                }
            });
        }
    };

    let id_dragging = item_id.clone();
    let id_target = item_id.clone();
    let id_edit = item_id.clone();

    view! {
        <li
            class="sortable-row checklist-row"
            class:dragging=move || sortable.is_dragging(&id_dragging)
            class:drop-target=move || sortable.is_drop_target(&id_target)
            on:mouseenter=make_on_item_mouseenter(sortable, item_id.clone())
        >
            <span
                class="drag-handle"
                class:disabled=move || locked.get()
                title=move || guard.with(|g| g.reason().map(|r| format!("{:?}", r)).unwrap_or_default())
                on:mousedown=make_on_handle_mousedown(sortable, item_id.clone(), locked)
            >
                "⠿"
            </span>
            <Show
                when=move || is_editing.get()
                fallback=move || {
                    let id_edit = id_edit.clone();
                    view! {
                        <span class="row-name">{move || name.get()}</span>
                        <button
                            class="edit-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                store.editing_id().set(Some(id_edit.clone()));
                            }
                        >
                            "✎"
                        </button>
                    }
                }
            >
                <RenameInput
                    initial=name.get_untracked()
                    on_done=Callback::new({
                        let rename = rename.clone();
                        move |renamed: Option<String>| {
                            store.editing_id().set(None);
                            if let Some(new_name) = renamed {
                                rename(new_name);
                            }
                        }
                    })
                />
            </Show>
            <div class="checklist-fields">
                <AutosaveField item_id=item_id.clone() field=TrackedField::Answer server_value=answer placeholder="Answer" />
                <AutosaveField item_id=item_id.clone() field=TrackedField::Location server_value=location placeholder="Location" />
                <AutosaveField item_id=item_id.clone() field=TrackedField::Comment server_value=comment placeholder="Comment" />
            </div>
            <DeleteConfirmButton item_id=item_id.clone() on_confirm=Callback::new(delete) />
        </li>
    }
}
