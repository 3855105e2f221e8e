//! HTTP Surface
//!
//! JSON routes over the item commands. Each scope owns a collection route
//! (`GET`/`POST`, plus `/deleted` and `/reorder`); each item owns a member
//! route (`PATCH`/`DELETE`, plus `/restore`).

mod dto;
mod error;
mod handlers;

#[cfg(test)]
mod tests;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::commands::{Checklists, Sections, Subsections};
use crate::AppState;

pub use error::ErrorPayload;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        // sections of a company
        .route(
            "/api/companies/{id}/sections",
            get(handlers::list_items::<Sections>).post(handlers::create_item::<Sections>),
        )
        .route(
            "/api/companies/{id}/sections/deleted",
            get(handlers::list_deleted_items::<Sections>),
        )
        .route(
            "/api/companies/{id}/sections/reorder",
            post(handlers::reorder_items::<Sections>),
        )
        .route("/api/companies/{id}/seed", post(handlers::seed_template))
        .route(
            "/api/sections/{id}",
            patch(handlers::update_item::<Sections>).delete(handlers::delete_item::<Sections>),
        )
        .route("/api/sections/{id}/restore", post(handlers::restore_item::<Sections>))
        // subsections of a section
        .route(
            "/api/sections/{id}/subsections",
            get(handlers::list_items::<Subsections>).post(handlers::create_item::<Subsections>),
        )
        .route(
            "/api/sections/{id}/subsections/deleted",
            get(handlers::list_deleted_items::<Subsections>),
        )
        .route(
            "/api/sections/{id}/subsections/reorder",
            post(handlers::reorder_items::<Subsections>),
        )
        .route(
            "/api/subsections/{id}",
            patch(handlers::update_item::<Subsections>).delete(handlers::delete_item::<Subsections>),
        )
        .route(
            "/api/subsections/{id}/restore",
            post(handlers::restore_item::<Subsections>),
        )
        // checklists of a subsection
        .route(
            "/api/subsections/{id}/checklists",
            get(handlers::list_items::<Checklists>).post(handlers::create_item::<Checklists>),
        )
        .route(
            "/api/subsections/{id}/checklists/deleted",
            get(handlers::list_deleted_items::<Checklists>),
        )
        .route(
            "/api/subsections/{id}/checklists/reorder",
            post(handlers::reorder_items::<Checklists>),
        )
        .route(
            "/api/checklists/{id}",
            patch(handlers::update_item::<Checklists>).delete(handlers::delete_item::<Checklists>),
        )
        .route("/api/checklists/{id}/restore", post(handlers::restore_item::<Checklists>))
        .route("/api/availability", post(handlers::availability))
        .with_state(state)
}
