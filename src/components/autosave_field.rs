//! Autosave Field Component
//!
//! Text field that writes itself back to the server after the user stops
//! typing for `DEBOUNCE_WINDOW_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reorder_core::{FieldAutosave, FieldPatch, DEBOUNCE_WINDOW_MS};
use wasm_bindgen::JsCast;

use crate::commands::{self, ChecklistsApi};

/// Which checklist field the input edits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackedField {
    Comment,
    Location,
    Answer,
}

impl TrackedField {
    fn patch(self, value: String) -> FieldPatch {
        match self {
            TrackedField::Comment => FieldPatch {
                comment: Some(value),
                ..Default::default()
            },
            TrackedField::Location => FieldPatch {
                location: Some(value),
                ..Default::default()
            },
            TrackedField::Answer => FieldPatch {
                answer: Some(value),
                ..Default::default()
            },
        }
    }

    fn label(self) -> &'static str {
        match self {
            TrackedField::Comment => "comment",
            TrackedField::Location => "location",
            TrackedField::Answer => "answer",
        }
    }
}

/// Debounced text input for one field of one checklist.
///
/// `server_value` changes on every refetch; those updates never produce a
/// write. Failed writes are logged and dropped.
#[component]
pub fn AutosaveField(
    #[prop(into)] item_id: String,
    field: TrackedField,
    #[prop(into)] server_value: Signal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let autosave = StoredValue::new(FieldAutosave::loaded(&server_value.get_untracked()));
    let (local, set_local) = signal(server_value.get_untracked());

    // Refetched server value: move the reference, keep an edit still in its window
    Effect::new(move |_| {
        let value = server_value.get();
        autosave.update_value(|state| state.refresh(&value));
        set_local.set(autosave.with_value(|state| state.local().to_string()));
    });

    let on_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let value = input.value();
        set_local.set(value.clone());
        let ticket = autosave.try_update_value(|state| state.input(value));
        let Some(ticket) = ticket else {
            return;
        };

        let item_id = item_id.clone();
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_WINDOW_MS).await;
            let Some(commit) = autosave.try_update_value(|state| state.settle(ticket)).flatten() else {
                return;
            };
            web_sys::console::log_1(&format!("[AUTOSAVE] {} {} <- {:?}", item_id, field.label(), commit).into());
            if let Err(e) = commands::update_item::<ChecklistsApi>(&item_id, &field.patch(commit)).await {
                web_sys::console::error_1(&format!("[AUTOSAVE] {} {} failed: {}", item_id, field.label(), e).into());
            }
        });
    };

    view! {
        <input
            type="text"
            class=format!("autosave-field autosave-{}", field.label())
            placeholder=placeholder
            prop:value=move || local.get()
            on:input=on_input
        />
    }
}
