//! Rename Input Component

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Inline name editor. Enter commits, Escape cancels; `on_done` receives
/// `Some(name)` for a changed non-blank name and `None` otherwise.
#[component]
pub fn RenameInput(#[prop(into)] initial: String, on_done: Callback<Option<String>>) -> impl IntoView {
    let (value, set_value) = signal(initial.clone());
    // blur fires again when the input unmounts after Enter
    let done = StoredValue::new(false);

    let finish = move |commit: bool| {
        if done.get_value() {
            return;
        }
        done.set_value(true);
        let name = value.get_untracked().trim().to_string();
        if commit && !name.is_empty() && name != initial {
            on_done.run(Some(name));
        } else {
            on_done.run(None);
        }
    };
    let finish_key = finish.clone();

    view! {
        <input
            type="text"
            class="rename-input"
            prop:value=move || value.get()
            on:click=|ev| ev.stop_propagation()
            on:input=move |ev| {
                if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                    set_value.set(input.value());
                }
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                "Enter" => finish_key(true),
                "Escape" => finish_key(false),
                _ => {}
            }
            on:blur=move |_| finish(true)
        />
    }
}
