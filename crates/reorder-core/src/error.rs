//! Error types for ordering operations

use thiserror::Error;

use crate::guard::GuardReason;

/// A reorder payload that does not describe the scope's active items exactly once
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("item {0} is missing from the reorder payload")]
    Missing(String),
    #[error("item {0} appears more than once in the reorder payload")]
    Duplicate(String),
    #[error("item {0} is not an active item of this scope")]
    Unknown(String),
    #[error("order indices must run densely from 1 to {expected}")]
    NotDense { expected: usize },
}

/// Failures reported by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("rejected: {0}")]
    Rejected(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server error: {0}")]
    Server(String),
}

/// Errors surfaced by the drag session controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("reorder blocked: {0:?}")]
    Guarded(GuardReason),
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("reorder submission failed, local order restored: {0}")]
    Backend(#[from] BackendError),
}
