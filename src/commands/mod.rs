//! HTTP Command Wrappers
//!
//! Frontend bindings to the server's JSON routes, organized by domain.

mod items;
mod template;

use reorder_core::BackendError;
use serde::de::DeserializeOwned;

use crate::models::ErrorPayload;

// Re-export all public items
pub use items::*;
pub use template::*;

/// `{origin}/api`, so the UI works wherever the server hosts it
fn api_base() -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}/api", origin)
}

/// Percent-encode one path segment
fn segment(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}

/// Send a request and decode its JSON body, mapping error bodies to `BackendError`
async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, BackendError> {
    let response = request
        .send()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Transport(format!("invalid response body: {}", e)));
    }

    let message = match response.json::<ErrorPayload>().await {
        Ok(payload) => format!("{}: {}", payload.operation, payload.message),
        Err(_) => format!("request failed with status {}", status),
    };
    Err(match status.as_u16() {
        404 => BackendError::NotFound(message),
        400 | 409 | 422 => BackendError::Rejected(message),
        _ => BackendError::Server(message),
    })
}
