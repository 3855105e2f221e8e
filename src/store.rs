//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Everything the
//! reorder guard reads lives here.

use leptos::prelude::*;
use reactive_stores::Store;
use reorder_core::ScopeKey;

/// Busy and selection state shared by every list
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub selected_section: Option<String>,
    pub selected_subsection: Option<String>,
    /// Item whose edit form is open
    pub editing_id: Option<String>,
    /// Item awaiting delete confirmation
    pub pending_delete_id: Option<String>,
    /// Scopes with a create/update/delete/reorder request in flight
    pub busy_scopes: Vec<ScopeKey>,
    /// Message for the inline error banner
    pub error: Option<String>,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_request(store: &UiStore, scope: &ScopeKey) {
    store.busy_scopes().write().push(scope.clone());
}

/// Clears one request; other requests on the same scope keep it busy
pub fn store_end_request(store: &UiStore, scope: &ScopeKey) {
    let binding = store.busy_scopes();
    let mut busy = binding.write();
    if let Some(pos) = busy.iter().position(|s| s == scope) {
        busy.remove(pos);
    }
}

pub fn store_is_busy(store: &UiStore, scope: &ScopeKey) -> bool {
    store.busy_scopes().with(|busy| busy.contains(scope))
}

pub fn store_show_error(store: &UiStore, message: impl Into<String>) {
    let message = message.into();
    web_sys::console::error_1(&format!("[APP] {}", message).into());
    store.error().set(Some(message));
}

pub fn store_select_section(store: &UiStore, section_id: Option<String>) {
    store.selected_section().set(section_id);
    store.selected_subsection().set(None);
}
