//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload lists from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Company whose template is being edited
    pub company_id: ReadSignal<String>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), company_id: ReadSignal<String>) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            company_id,
        }
    }

    /// Trigger a reload of every list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
