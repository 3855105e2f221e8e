//! Persistence Contracts
//!
//! The operations the ordering core consumes from its persistence
//! collaborator. The server implements them over SQLite; the frontend over
//! HTTP. Futures are not required to be `Send` so browser clients qualify.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BackendError;
use crate::item::{ChecklistKind, Orderable, ScopeKey};
use crate::payload::OrderEntry;

/// Partial field update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl FieldPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.comment.is_none() && self.location.is_none() && self.answer.is_none()
    }
}

/// Fields of a new item; `kind` only applies to checklists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChecklistKind>,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }

    pub fn checklist(name: impl Into<String>, kind: ChecklistKind) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
        }
    }
}

/// Backend operations for one kind of orderable item
#[async_trait(?Send)]
pub trait ScopeBackend {
    type Item: Orderable + Clone;

    /// Apply an explicit order index to every listed item in one pass
    async fn reorder_items(&self, scope: &ScopeKey, entries: &[OrderEntry]) -> Result<(), BackendError>;

    async fn update_item_fields(&self, item_id: &str, patch: &FieldPatch) -> Result<Self::Item, BackendError>;

    /// Create at the end of the item's group
    async fn create_item(&self, scope: &ScopeKey, fields: &NewItem) -> Result<Self::Item, BackendError>;

    /// Soft-delete
    async fn delete_item(&self, item_id: &str) -> Result<(), BackendError>;

    /// Re-append a soft-deleted item to its group
    async fn restore_item(&self, item_id: &str) -> Result<(), BackendError>;

    async fn list_items(&self, scope: &ScopeKey) -> Result<Vec<Self::Item>, BackendError>;

    async fn list_deleted_items(&self, scope: &ScopeKey) -> Result<Vec<Self::Item>, BackendError>;
}
