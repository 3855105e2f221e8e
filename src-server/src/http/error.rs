use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// JSON body of every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
}

pub fn domain_error_response(err: DomainError, operation: &str) -> Response {
    let (status, code) = status_for_domain_error(&err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::error!("{} failed: {}", operation, err);
    }
    let payload = ErrorPayload {
        code: code.to_string(),
        message: err.to_string(),
        operation: operation.to_string(),
    };
    (status, Json(payload)).into_response()
}

fn status_for_domain_error(err: &DomainError) -> (StatusCode, &'static str) {
    match err {
        DomainError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        DomainError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
        DomainError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
    }
}
