//! Named Item List Component
//!
//! Sortable list of sections or subsections: select, rename, delete and
//! drag to reorder.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    create_sortable_signals, make_on_container_mousemove, make_on_container_mouseup, make_on_handle_mousedown,
    make_on_item_mouseenter, make_on_mouseleave,
};
use reorder_core::{FieldPatch, Orderable, ScopeKey};

use crate::commands::{self, Resource};
use crate::components::{DeleteConfirmButton, DeletedItems, NewItemForm, RenameInput};
use crate::context::use_app_context;
use crate::models::Named;
use crate::sortable::{list_guard, submit_drop, visible_items};
use crate::store::{store_begin_request, store_end_request, store_show_error, use_ui_store, UiStateStoreFields};

#[component]
pub fn NamedItemList<R: Resource>(
    api: R,
    #[prop(into)] title: String,
    #[prop(into)] scope: Signal<Option<ScopeKey>>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] on_select: Callback<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let items = RwSignal::new(Vec::<R::Item>::new());
    let sortable = create_sortable_signals();

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(scope) = scope.get() else {
            items.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match commands::list_items::<R>(&scope).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[LIST] {} loaded {} {}", scope, loaded.len(), R::PLURAL).into());
                    items.set(loaded);
                }
                Err(e) => store_show_error(&store, e),
            }
        });
    });

    let visible = Memo::new(move |_| visible_items(&items.get(), None));
    let guard = Memo::new(move |_| match scope.get() {
        Some(scope) => list_guard(&store, &scope, &visible.get(), false),
        None => reorder_core::ReorderGuard::new(0),
    });
    let locked = Signal::derive(move || guard.with(|g| g.is_engaged()));

    let on_drop = move |source_id: String, dest_id: String| {
        let Some(scope) = scope.get_untracked() else {
            return;
        };
        submit_drop::<R>(scope, None, items, guard.get_untracked(), source_id, dest_id, store, ctx);
    };

    let rename = move |item_id: String, name: String| {
        let Some(scope) = scope.get_untracked() else {
            return;
        };
        spawn_local(async move {
            store_begin_request(&store, &scope);
            let patch = FieldPatch {
                name: Some(name),
                ..Default::default()
            };
            let result = commands::update_item::<R>(&item_id, &patch).await;
            store_end_request(&store, &scope);
            match result {
                Ok(_) => ctx.reload(),
                Err(e) => store_show_error(&store, e),
            }
        });
    };

    let delete = move |item_id: String| {
        let Some(scope) = scope.get_untracked() else {
            return;
        };
        spawn_local(async move {
            store_begin_request(&store, &scope);
            let result = commands::delete_item::<R>(&item_id).await;
            store_end_request(&store, &scope);
            match result {
                Ok(()) => {
                    if selected.get_untracked().as_deref() == Some(item_id.as_str()) {
                        on_select.run(None);
                    }
                    ctx.reload();
                }
                Err(e) => store_show_error(&store, e),
            }
        });
    };

    view! {
        <section class=format!("column {}-column", R::PLURAL)>
            <h2>{title}</h2>
            <Show when=move || scope.with(Option::is_some) fallback=|| view! { <p class="empty-hint">"Select a parent first"</p> }>
                <ul
                    class="sortable-list"
                    class:locked=move || locked.get()
                    on:mousemove=make_on_container_mousemove(sortable)
                    on:mouseup=make_on_container_mouseup(sortable, on_drop)
                    on:mouseleave=make_on_mouseleave(sortable)
                >
                    <For
                        each=move || visible.get()
                        key=|item| (item.item_id().to_string(), item.order_index(), item.display_name().to_string())
                        children=move |item| {
                            let id = item.item_id().to_string();
                            let name = item.display_name().to_string();
                            let id_select = id.clone();
                            let id_selected = id.clone();
                            let id_dragging = id.clone();
                            let id_target = id.clone();
                            let id_editing = id.clone();
                            let id_edit = id.clone();
                            let id_rename = id.clone();
                            let id_delete = id.clone();
                            let shown_name = name.clone();
                            let is_editing = Signal::derive(move || {
                                store.editing_id().with(|e| e.as_deref() == Some(id_editing.as_str()))
                            });

                            view! {
                                <li
                                    class="sortable-row"
                                    class:selected=move || selected.with(|s| s.as_deref() == Some(id_selected.as_str()))
                                    class:dragging=move || sortable.is_dragging(&id_dragging)
                                    class:drop-target=move || sortable.is_drop_target(&id_target)
                                    on:mouseenter=make_on_item_mouseenter(sortable, id.clone())
                                    on:click=move |_| {
                                        if !sortable.drag_just_ended_read.get_untracked() {
                                            on_select.run(Some(id_select.clone()));
                                        }
                                    }
                                >
                                    <span
                                        class="drag-handle"
                                        class:disabled=move || locked.get()
                                        title=move || guard.with(|g| g.reason().map(|r| format!("{:?}", r)).unwrap_or_default())
                                        on:mousedown=make_on_handle_mousedown(sortable, id.clone(), locked)
                                    >
                                        "⠿"
                                    </span>
                                    <Show
                                        when=move || is_editing.get()
                                        fallback=move || {
                                            let id_edit = id_edit.clone();
                                            view! {
                                                <span class="row-name">{shown_name.clone()}</span>
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
                                            initial=name.clone()
                                            on_done=Callback::new({
                                                let id_rename = id_rename.clone();
                                                move |renamed: Option<String>| {
                                                    store.editing_id().set(None);
                                                    if let Some(new_name) = renamed {
                                                        rename(id_rename.clone(), new_name);
                                                    }
                                                }
                                            })
                                        />
                                    </Show>
                                    <DeleteConfirmButton
                                        item_id=id.clone()
                                        on_confirm=Callback::new(move |_| delete(id_delete.clone()))
                                    />
                                </li>
                            }
                        }
                    />
                </ul>
                <NewItemForm api=api scope=scope placeholder=format!("Add {}...", R::PLURAL.trim_end_matches('s')) />
                <DeletedItems api=api scope=scope />
            </Show>
        </section>
    }
}
