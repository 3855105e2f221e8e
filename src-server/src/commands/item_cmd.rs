//! Item Commands
//!
//! List, create, edit, soft-delete, restore and bulk reorder for any item kind.

use reorder_core::{FieldPatch, NewItem, OrderEntry};

use crate::domain::{DomainResult, Entity};
use crate::repository::{OrderedRepository, Repository};
use crate::AppState;

use super::ItemKind;

/// Active items of a scope, in order
pub async fn list_items<K: ItemKind>(state: &AppState, scope_id: &str) -> DomainResult<Vec<K::Item>> {
    K::repo(state).list(scope_id).await
}

/// Soft-deleted items of a scope, for the restore panel
pub async fn list_deleted_items<K: ItemKind>(state: &AppState, scope_id: &str) -> DomainResult<Vec<K::Item>> {
    K::repo(state).list_deleted(scope_id).await
}

pub async fn create_item<K: ItemKind>(state: &AppState, scope_id: &str, fields: &NewItem) -> DomainResult<K::Item> {
    let item = K::repo(state).create(scope_id, fields).await?;
    log::info!("[{}] created {} in {}", K::NAME, item.id(), scope_id);
    Ok(item)
}

pub async fn update_item<K: ItemKind>(state: &AppState, id: &str, patch: &FieldPatch) -> DomainResult<K::Item> {
    K::repo(state).update_fields(id, patch).await
}

pub async fn delete_item<K: ItemKind>(state: &AppState, id: &str) -> DomainResult<()> {
    K::repo(state).delete(id).await?;
    log::info!("[{}] soft-deleted {}", K::NAME, id);
    Ok(())
}

pub async fn restore_item<K: ItemKind>(state: &AppState, id: &str) -> DomainResult<K::Item> {
    K::repo(state).restore(id).await
}

/// Apply a complete reorder payload for one scope
pub async fn reorder_items<K: ItemKind>(state: &AppState, scope_id: &str, entries: &[OrderEntry]) -> DomainResult<()> {
    match K::repo(state).reorder(scope_id, entries).await {
        Ok(()) => Ok(()),
        Err(e) => {
            log::warn!("[{}] reorder of {} rejected: {}", K::NAME, scope_id, e);
            Err(e)
        }
    }
}
