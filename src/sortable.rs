//! Sortable List Glue
//!
//! Connects the pointer handlers of `leptos_dragdrop` to a `DragSession`:
//! the guard is derived from the UI store, a drop renders the reordered list
//! at once and the previous order comes back if the server refuses it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reorder_core::{ChecklistKind, DragResult, DragSession, Orderable, ReorderGuard, ScopeKey};

use crate::commands::{HttpBackend, Resource};
use crate::context::AppContext;
use crate::store::{store_begin_request, store_end_request, store_is_busy, store_show_error, UiStateStoreFields, UiStore};

/// Items of `group` (or all items when `group` is `None`), active only, in display order
pub fn visible_items<T: Orderable + Clone>(all: &[T], group: Option<ChecklistKind>) -> Vec<T> {
    let mut items: Vec<T> = all
        .iter()
        .filter(|i| !i.is_deleted() && (group.is_none() || i.kind() == group))
        .cloned()
        .collect();
    items.sort_by_key(|i| i.order_index());
    items
}

/// Replace one group's items inside the full list, leaving the other group untouched
pub fn merge_group<T: Orderable + Clone>(all: &[T], group: Option<ChecklistKind>, replaced: &[T]) -> Vec<T> {
    match group {
        None => replaced.to_vec(),
        Some(g) => all
            .iter()
            .filter(|i| i.kind() != Some(g))
            .cloned()
            .chain(replaced.iter().cloned())
            .collect(),
    }
}

/// Reorder guard of one list, read reactively from the store.
///
/// `selection_bound` lists only accept drags while their scope is the one
/// selected in the sidebar.
pub fn list_guard<T: Orderable>(
    store: &UiStore,
    scope: &ScopeKey,
    items: &[T],
    selection_bound: bool,
) -> ReorderGuard {
    let owns = |id: &Option<String>| {
        id.as_ref()
            .filter(|id| items.iter().any(|i| i.item_id() == id.as_str()))
            .cloned()
    };
    let mut guard = ReorderGuard::new(items.len())
        .in_flight(store_is_busy(store, scope))
        .editing(owns(&store.editing_id().get()))
        .pending_delete(owns(&store.pending_delete_id().get()));
    if selection_bound {
        let selected = store.selected_subsection().get().map(ScopeKey::Subsection);
        guard = guard.scoped(scope.clone(), selected);
    }
    guard
}

/// Handle a drop from `source_id` onto `dest_id` of one list.
///
/// `items` holds the full list as loaded (both groups for checklists).
pub fn submit_drop<R: Resource>(
    scope: ScopeKey,
    group: Option<ChecklistKind>,
    items: RwSignal<Vec<R::Item>>,
    guard: ReorderGuard,
    source_id: String,
    dest_id: String,
    store: UiStore,
    ctx: AppContext,
) {
    let all = items.get_untracked();
    let mut session = match group {
        Some(g) => DragSession::for_group(scope.clone(), g, &all),
        None => DragSession::new(scope.clone(), &all),
    };
    if let Err(rejected) = session.begin_drag(&source_id, &guard) {
        web_sys::console::log_1(&format!("[DND] drag refused: {:?}", rejected).into());
        return;
    }
    let Some(preview) = session.preview(&dest_id) else {
        session.cancel_drag();
        return;
    };
    items.set(merge_group(&all, group, &preview));

    spawn_local(async move {
        let backend = HttpBackend::<R>::new();
        store_begin_request(&store, &scope);
        let result = session.complete_drag(&dest_id, &guard, &backend).await;
        store_end_request(&store, &scope);

        match result {
            Ok(DragResult::Applied(payload)) => {
                web_sys::console::log_1(&format!("[DND] {} reordered ({} entries)", scope, payload.len()).into());
                ctx.reload();
            }
            Ok(DragResult::Ignored) => {
                items.set(all);
            }
            Err(e) => {
                // session.items() is the pre-drag snapshot again
                items.set(merge_group(&all, group, session.items()));
                store_show_error(&store, e.to_string());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Checklist;

    fn checklist(id: &str, order: u32, kind: ChecklistKind) -> Checklist {
        Checklist {
            id: id.to_string(),
            subsection_id: "ss".to_string(),
            name: id.to_string(),
            kind,
            comment: None,
            location: None,
            answer: None,
            order_index: order,
            deleted_at: None,
        }
    }

    fn ids(items: &[Checklist]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_visible_items_filters_group_and_deleted() {
        let mut deleted = checklist("S3", 3, ChecklistKind::Status);
        deleted.deleted_at = Some(1);
        let all = vec![
            checklist("I1", 3, ChecklistKind::Information),
            checklist("S2", 2, ChecklistKind::Status),
            deleted,
            checklist("S1", 1, ChecklistKind::Status),
        ];
        assert_eq!(ids(&visible_items(&all, Some(ChecklistKind::Status))), vec!["S1", "S2"]);
        assert_eq!(ids(&visible_items(&all, Some(ChecklistKind::Information))), vec!["I1"]);
        assert_eq!(visible_items(&all, None).len(), 3);
    }

    #[test]
    fn test_merge_group_keeps_other_group() {
        let all = vec![
            checklist("S1", 1, ChecklistKind::Status),
            checklist("I1", 2, ChecklistKind::Information),
            checklist("I2", 3, ChecklistKind::Information),
        ];
        let reordered = vec![
            checklist("I2", 1, ChecklistKind::Information),
            checklist("I1", 2, ChecklistKind::Information),
        ];
        let merged = merge_group(&all, Some(ChecklistKind::Information), &reordered);
        assert_eq!(ids(&merged), vec!["S1", "I2", "I1"]);
        assert_eq!(
            ids(&visible_items(&merged, Some(ChecklistKind::Information))),
            vec!["I2", "I1"]
        );
    }
}
