//! Domain Layer - Core Entity Trait
//!
//! Basic contract for all domain entities plus the shared error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use reorder_core::PayloadError;

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// Opaque, stable identifier
    fn id(&self) -> &str;

    /// Soft-delete timestamp (epoch millis)
    fn deleted_at(&self) -> Option<i64>;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<PayloadError> for DomainError {
    fn from(e: PayloadError) -> Self {
        DomainError::InvalidInput(e.to_string())
    }
}

/// Trimmed, non-empty display name
pub fn validate_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidInput("name must not be blank".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Current time as epoch millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Fresh opaque identifier
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  Roof  "), Ok("Roof".to_string()));
        assert!(matches!(validate_name("   "), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_payload_error_maps_to_invalid_input() {
        let err: DomainError = PayloadError::Missing("abc".into()).into();
        assert_eq!(
            err,
            DomainError::InvalidInput("item abc is missing from the reorder payload".into())
        );
    }
}
