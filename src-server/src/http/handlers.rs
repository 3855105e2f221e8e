use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use reorder_core::{FieldPatch, NewItem};

use crate::commands::{self, ItemKind};
use crate::domain::AvailabilityRequest;
use crate::AppState;

use super::dto::{AvailabilityResponse, MutationResponse, ReorderRequest, SeedResponse};
use super::error::domain_error_response;

fn operation<K: ItemKind>(action: &str) -> String {
    format!("{}.{}", K::NAME, action)
}

pub async fn list_items<K: ItemKind>(State(state): State<AppState>, Path(scope_id): Path<String>) -> Response {
    match commands::list_items::<K>(&state, &scope_id).await {
        Ok(items) => Json(items).into_response(),
        Err(err) => domain_error_response(err, &operation::<K>("list")),
    }
}

pub async fn list_deleted_items<K: ItemKind>(
    State(state): State<AppState>,
    Path(scope_id): Path<String>,
) -> Response {
    match commands::list_deleted_items::<K>(&state, &scope_id).await {
        Ok(items) => Json(items).into_response(),
        Err(err) => domain_error_response(err, &operation::<K>("list_deleted")),
    }
}

pub async fn create_item<K: ItemKind>(
    State(state): State<AppState>,
    Path(scope_id): Path<String>,
    Json(fields): Json<NewItem>,
) -> Response {
    match commands::create_item::<K>(&state, &scope_id, &fields).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(err) => domain_error_response(err, &operation::<K>("create")),
    }
}

pub async fn reorder_items<K: ItemKind>(
    State(state): State<AppState>,
    Path(scope_id): Path<String>,
    Json(request): Json<ReorderRequest>,
) -> Response {
    match commands::reorder_items::<K>(&state, &scope_id, &request.entries).await {
        Ok(()) => Json(MutationResponse { ok: true }).into_response(),
        Err(err) => domain_error_response(err, &operation::<K>("reorder")),
    }
}

pub async fn update_item<K: ItemKind>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<FieldPatch>,
) -> Response {
    match commands::update_item::<K>(&state, &id, &patch).await {
        Ok(item) => Json(item).into_response(),
        Err(err) => domain_error_response(err, &operation::<K>("update")),
    }
}

pub async fn delete_item<K: ItemKind>(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match commands::delete_item::<K>(&state, &id).await {
        Ok(()) => Json(MutationResponse { ok: true }).into_response(),
        Err(err) => domain_error_response(err, &operation::<K>("delete")),
    }
}

pub async fn restore_item<K: ItemKind>(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match commands::restore_item::<K>(&state, &id).await {
        Ok(item) => Json(item).into_response(),
        Err(err) => domain_error_response(err, &operation::<K>("restore")),
    }
}

pub async fn seed_template(State(state): State<AppState>, Path(company_id): Path<String>) -> Response {
    match commands::seed_default_template(&state, &company_id).await {
        Ok(seeded) => (StatusCode::CREATED, Json(SeedResponse { company_id, seeded })).into_response(),
        Err(err) => domain_error_response(err, "template.seed"),
    }
}

pub async fn availability(Json(request): Json<AvailabilityRequest>) -> Response {
    match commands::availability(&request) {
        Ok(slots) => Json(AvailabilityResponse { slots }).into_response(),
        Err(err) => domain_error_response(err, "schedule.availability"),
    }
}
