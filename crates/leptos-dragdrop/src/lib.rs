//! Leptos Sortable Lists
//!
//! Pointer-driven list reordering for Leptos using mouse events.
//! A mousedown on a handle records a pending drag; the drag only starts once
//! the pointer moves past a small threshold, so clicks still work. Dropping
//! onto another row of the same list reports `(source_id, dest_id)`.
//!
//! Every handler is scoped to one list container: leaving the container
//! cancels the drag, so two lists on a page never see each other's drags.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set so the trailing click can be ignored
const DRAG_END_GRACE_MS: i32 = 100;

/// Drag state signals of one sortable list
#[derive(Clone, Copy)]
pub struct SortableSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub drop_target_read: ReadSignal<Option<String>>,
    pub drop_target_write: WriteSignal<Option<String>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl SortableSignals {
    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging_id_read.with(|d| d.as_deref() == Some(id))
    }

    pub fn is_drop_target(&self, id: &str) -> bool {
        self.drop_target_read.with(|t| t.as_deref() == Some(id))
    }
}

pub fn create_sortable_signals() -> SortableSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<String>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_read, start_write) = signal((0i32, 0i32));
    SortableSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

/// True once the pointer has moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), now: (i32, i32)) -> bool {
    (now.0 - start.0).abs() > DRAG_THRESHOLD_PX || (now.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag(sortable: &SortableSignals) {
    sortable.dragging_id_write.set(None);
    sortable.drop_target_write.set(None);
    sortable.pending_id_write.set(None);
    sortable.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = sortable.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_END_GRACE_MS,
        );
        cb.forget();
    }
}

/// Mousedown handler for a row's drag handle.
///
/// Does nothing while `disabled` is true, so a guarded list never enters a
/// pending drag.
pub fn make_on_handle_mousedown(
    sortable: SortableSignals,
    item_id: String,
    disabled: Signal<bool>,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || disabled.get_untracked() {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
            {
                return;
            }
        }
        ev.prevent_default();
        sortable.pending_id_write.set(Some(item_id.clone()));
        sortable.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Mousemove handler for the list container; promotes a pending drag once
/// the threshold is crossed
pub fn make_on_container_mousemove(sortable: SortableSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if sortable.dragging_id_read.with_untracked(Option::is_some) {
            return;
        }
        let Some(pending) = sortable.pending_id_read.get_untracked() else {
            return;
        };
        if exceeds_threshold(sortable.start_read.get_untracked(), (ev.client_x(), ev.client_y())) {
            web_sys::console::log_1(&format!("[DND] drag start {}", pending).into());
            sortable.dragging_id_write.set(Some(pending));
        }
    }
}

/// Mouseenter handler for a row: it becomes the drop target
pub fn make_on_item_mouseenter(sortable: SortableSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        let Some(dragging) = sortable.dragging_id_read.get_untracked() else {
            return;
        };
        // Don't allow dropping on self
        if dragging != item_id {
            sortable.drop_target_write.set(Some(item_id.clone()));
        }
    }
}

/// Mouseleave handler for the list container: cancels any drag
pub fn make_on_mouseleave(sortable: SortableSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        let active = sortable.dragging_id_read.with_untracked(Option::is_some)
            || sortable.pending_id_read.with_untracked(Option::is_some);
        if active {
            end_drag(&sortable);
        }
    }
}

/// Mouseup handler for the list container; reports a completed drop
pub fn make_on_container_mouseup<F>(sortable: SortableSignals, on_drop: F) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(String, String) + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        let dragging_id = sortable.dragging_id_read.get_untracked();
        let drop_target = sortable.drop_target_read.get_untracked();
        let was_active = dragging_id.is_some() || sortable.pending_id_read.with_untracked(Option::is_some);
        if !was_active {
            return;
        }

        end_drag(&sortable);
        // A pending drag that never crossed the threshold is just a click
        if let (Some(source), Some(dest)) = (dragging_id, drop_target) {
            web_sys::console::log_1(&format!("[DND] drop {} -> {}", source, dest).into());
            on_drop(source, dest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }
}
