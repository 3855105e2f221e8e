//! Checklist Panel Component
//!
//! Checklists of the selected subsection, shown as two independently
//! sortable groups (status, then information).

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{create_sortable_signals, make_on_container_mousemove, make_on_container_mouseup, make_on_mouseleave};
use reorder_core::{ChecklistKind, ReorderGuard, ScopeKey};

use crate::commands::{self, ChecklistsApi};
use crate::components::{ChecklistRow, DeletedItems, NewItemForm};
use crate::context::use_app_context;
use crate::models::Checklist;
use crate::sortable::{list_guard, submit_drop, visible_items};
use crate::store::{store_show_error, use_ui_store};

#[component]
pub fn ChecklistPanel(#[prop(into)] scope: Signal<Option<ScopeKey>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let items = RwSignal::new(Vec::<Checklist>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(scope) = scope.get() else {
            items.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match commands::list_items::<ChecklistsApi>(&scope).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[LIST] {} loaded {} checklists", scope, loaded.len()).into());
                    items.set(loaded);
                }
                Err(e) => store_show_error(&store, e),
            }
        });
    });

    view! {
        <section class="column checklists-column">
            <h2>"Checklists"</h2>
            <Show
                when=move || scope.with(Option::is_some)
                fallback=|| view! { <p class="empty-hint">"Select a subsection"</p> }
            >
                {move || scope.get().map(|scope| view! {
                    <ChecklistGroup scope=scope.clone() group=ChecklistKind::Status items=items />
                    <ChecklistGroup scope=scope group=ChecklistKind::Information items=items />
                })}
                <NewItemForm api=ChecklistsApi scope=scope placeholder="Add checklist..." with_type=true />
                <DeletedItems api=ChecklistsApi scope=scope />
            </Show>
        </section>
    }
}

/// One discriminator group of a subsection's checklists
#[component]
fn ChecklistGroup(scope: ScopeKey, group: ChecklistKind, items: RwSignal<Vec<Checklist>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let sortable = create_sortable_signals();

    let visible = Memo::new(move |_| visible_items(&items.get(), Some(group)));
    let guard = {
        let scope = scope.clone();
        Memo::new(move |_| list_guard(&store, &scope, &visible.get(), true))
    };

    let drop_scope = scope.clone();
    let on_drop = move |source_id: String, dest_id: String| {
        submit_drop::<ChecklistsApi>(
            drop_scope.clone(),
            Some(group),
            items,
            guard.get_untracked(),
            source_id,
            dest_id,
            store,
            ctx,
        );
    };

    let title = match group {
        ChecklistKind::Status => "Status",
        ChecklistKind::Information => "Information",
    };

    view! {
        <div class=format!("checklist-group checklist-group-{}", group)>
            <h3>{title}</h3>
            <ul
                class="sortable-list"
                class:locked=move || guard.with(ReorderGuard::is_engaged)
                on:mousemove=make_on_container_mousemove(sortable)
                on:mouseup=make_on_container_mouseup(sortable, on_drop)
                on:mouseleave=make_on_mouseleave(sortable)
            >
                <For
                    each=move || visible.get()
                    key=|item| item.id.clone()
                    children=move |item| {
                        view! {
                            <ChecklistRow
                                item_id=item.id
                                scope=scope.clone()
                                items=items
                                sortable=sortable
                                guard=guard
                            />
                        }
                    }
                />
            </ul>
            <Show when=move || visible.with(Vec::is_empty)>
                <p class="empty-hint">"No items"</p>
            </Show>
        </div>
    }
}
