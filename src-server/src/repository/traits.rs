//! Repository Layer - Core Traits
//!
//! Abstract interfaces for data access over orderable entities.

use async_trait::async_trait;

use reorder_core::{FieldPatch, NewItem, OrderEntry};

use crate::domain::{DomainResult, Entity};

/// CRUD over entities living in a sibling scope
///
/// `scope_id` is the parent key: a company for sections, a section for
/// subsections, a subsection for checklists.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create at the end of the entity's group
    async fn create(&self, scope_id: &str, fields: &NewItem) -> DomainResult<T>;

    /// Find entity by ID, deleted or not
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>>;

    /// Active entities of a scope in order
    async fn list(&self, scope_id: &str) -> DomainResult<Vec<T>>;

    /// Apply a partial field update; order is untouched
    async fn update_fields(&self, id: &str, patch: &FieldPatch) -> DomainResult<T>;

    /// Soft-delete
    async fn delete(&self, id: &str) -> DomainResult<()>;
}

/// Ordering operations on top of CRUD
#[async_trait]
pub trait OrderedRepository<T: Entity>: Repository<T> {
    /// Soft-deleted entities of a scope, most recently deleted first
    async fn list_deleted(&self, scope_id: &str) -> DomainResult<Vec<T>>;

    /// Apply a complete `{id, order}` payload in one transaction
    async fn reorder(&self, scope_id: &str, entries: &[OrderEntry]) -> DomainResult<()>;

    /// Re-append a soft-deleted entity to its group
    async fn restore(&self, id: &str) -> DomainResult<T>;
}
