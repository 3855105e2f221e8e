//! Repository-backed ScopeBackend
//!
//! Lets the drag session controller run directly against SQLite, which is
//! how the server-side tests exercise the full drag round trip.

use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;

use reorder_core::{BackendError, FieldPatch, NewItem, OrderEntry, Orderable, ScopeBackend, ScopeKey};

use crate::domain::{DomainError, Entity};

use super::traits::OrderedRepository;

impl From<DomainError> for BackendError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(msg) => BackendError::NotFound(msg),
            DomainError::InvalidInput(msg) | DomainError::Conflict(msg) => BackendError::Rejected(msg),
            DomainError::Internal(msg) => BackendError::Server(msg),
        }
    }
}

/// One repository bound to the scope level it orders
pub struct ScopedStore<T, R> {
    repo: Arc<R>,
    level: &'static str,
    _item: PhantomData<fn() -> T>,
}

impl<T, R> ScopedStore<T, R> {
    /// `level` is the `ScopeKey` level this store accepts ("company",
    /// "section" or "subsection")
    pub fn new(repo: Arc<R>, level: &'static str) -> Self {
        Self {
            repo,
            level,
            _item: PhantomData,
        }
    }

    fn scope_id<'a>(&self, scope: &'a ScopeKey) -> Result<&'a str, BackendError> {
        if scope.level() != self.level {
            return Err(BackendError::Rejected(format!(
                "expected a {} scope, got {}",
                self.level, scope
            )));
        }
        Ok(scope.id())
    }
}

#[async_trait(?Send)]
impl<T, R> ScopeBackend for ScopedStore<T, R>
where
    T: Entity + Orderable,
    R: OrderedRepository<T>,
{
    type Item = T;

    async fn reorder_items(&self, scope: &ScopeKey, entries: &[OrderEntry]) -> Result<(), BackendError> {
        let scope_id = self.scope_id(scope)?;
        Ok(self.repo.reorder(scope_id, entries).await?)
    }

    async fn update_item_fields(&self, item_id: &str, patch: &FieldPatch) -> Result<T, BackendError> {
        Ok(self.repo.update_fields(item_id, patch).await?)
    }

    async fn create_item(&self, scope: &ScopeKey, fields: &NewItem) -> Result<T, BackendError> {
        let scope_id = self.scope_id(scope)?;
        Ok(self.repo.create(scope_id, fields).await?)
    }

    async fn delete_item(&self, item_id: &str) -> Result<(), BackendError> {
        Ok(self.repo.delete(item_id).await?)
    }

    async fn restore_item(&self, item_id: &str) -> Result<(), BackendError> {
        self.repo.restore(item_id).await?;
        Ok(())
    }

    async fn list_items(&self, scope: &ScopeKey) -> Result<Vec<T>, BackendError> {
        let scope_id = self.scope_id(scope)?;
        Ok(self.repo.list(scope_id).await?)
    }

    async fn list_deleted_items(&self, scope: &ScopeKey) -> Result<Vec<T>, BackendError> {
        let scope_id = self.scope_id(scope)?;
        Ok(self.repo.list_deleted(scope_id).await?)
    }
}
