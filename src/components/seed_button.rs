//! Seed Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_show_error, use_ui_store};

/// Fills an empty company with the bundled default template
#[component]
pub fn SeedButton() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_ui_store();
    let (busy, set_busy) = signal(false);

    let seed = move |_| {
        let company_id = ctx.company_id.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            match commands::seed_default_template(&company_id).await {
                Ok(response) => {
                    web_sys::console::log_1(
                        &format!(
                            "[APP] seeded {}: {} sections, {} subsections, {} checklists",
                            response.company_id,
                            response.seeded.sections,
                            response.seeded.subsections,
                            response.seeded.checklists
                        )
                        .into(),
                    );
                    ctx.reload();
                }
                Err(e) => store_show_error(&store, e),
            }
            set_busy.set(false);
        });
    };

    view! {
        <button class="seed-btn" disabled=move || busy.get() on:click=seed>
            "Load default template"
        </button>
    }
}
