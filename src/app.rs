//! Inspection Template Editor App
//!
//! Main application component with three-column layout: sections,
//! subsections of the selected section, checklists of the selected
//! subsection.

use leptos::prelude::*;
use reactive_stores::Store;
use reorder_core::ScopeKey;

use crate::commands::{SectionsApi, SubsectionsApi};
use crate::components::{ChecklistPanel, ErrorBanner, NamedItemList, SeedButton};
use crate::context::AppContext;
use crate::store::{store_select_section, UiState, UiStateStoreFields};

const DEFAULT_COMPANY: &str = "default";

/// `?company=<id>` from the page URL
fn company_from_location() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| {
            search
                .trim_start_matches('?')
                .split('&')
                .find_map(|pair| pair.strip_prefix("company=").map(str::to_string))
        })
        .and_then(|raw| js_sys::decode_uri_component(&raw).ok().map(String::from))
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| DEFAULT_COMPANY.to_string())
}

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (company_id, _set_company_id) = signal(company_from_location());
    let store = Store::new(UiState::default());

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), company_id));
    provide_context(store);

    web_sys::console::log_1(&format!("[APP] editing template of company {}", company_id.get_untracked()).into());

    let company_scope = Signal::derive(move || Some(ScopeKey::Company(company_id.get())));
    let section_scope = Signal::derive(move || store.selected_section().get().map(ScopeKey::Section));
    let subsection_scope = Signal::derive(move || store.selected_subsection().get().map(ScopeKey::Subsection));

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Inspection Template"</h1>
                <span class="company-id">{move || company_id.get()}</span>
                <SeedButton />
            </header>

            <ErrorBanner />

            <main class="columns">
                <NamedItemList
                    api=SectionsApi
                    title="Sections"
                    scope=company_scope
                    selected=Signal::derive(move || store.selected_section().get())
                    on_select=Callback::new(move |id: Option<String>| store_select_section(&store, id))
                />
                <NamedItemList
                    api=SubsectionsApi
                    title="Subsections"
                    scope=section_scope
                    selected=Signal::derive(move || store.selected_subsection().get())
                    on_select=Callback::new(move |id: Option<String>| store.selected_subsection().set(id))
                />
                <ChecklistPanel scope=subsection_scope />
            </main>
        </div>
    }
}
