//! Checklist Repository
//!
//! Status and information checklists of a subsection share one order
//! space: status items take 1..M, information items M+1..M+K. Creating or
//! restoring an item re-packs both groups so the space stays dense.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};

use reorder_core::{append_to_group, validate_payload, ChecklistKind, FieldPatch, NewItem, OrderEntry};

use crate::domain::{now_millis, validate_name, Checklist, DomainError, DomainResult};

use super::db::{require, require_mut, SharedConnection};
use super::ordering::{self, CHECKLISTS};
use super::traits::{OrderedRepository, Repository};

const COLUMNS: &str =
    "id, subsection_id, name, type, comment, location, answer, order_index, deleted_at, created_at, updated_at";

pub struct ChecklistRepository {
    conn: SharedConnection,
}

impl ChecklistRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Active checklists of one kind, in group order
    pub async fn list_group(&self, subsection_id: &str, kind: ChecklistKind) -> DomainResult<Vec<Checklist>> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;
        Ok(active(conn, subsection_id)?
            .into_iter()
            .filter(|c| c.kind == kind)
            .collect())
    }
}

fn row_to_checklist(row: &Row) -> rusqlite::Result<Checklist> {
    let kind: String = row.get(3)?;
    Ok(Checklist {
        id: row.get(0)?,
        subsection_id: row.get(1)?,
        name: row.get(2)?,
        kind: ChecklistKind::parse(&kind).unwrap_or_default(),
        comment: row.get(4)?,
        location: row.get(5)?,
        answer: row.get(6)?,
        order_index: row.get(7)?,
        deleted_at: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

fn active(conn: &Connection, subsection_id: &str) -> DomainResult<Vec<Checklist>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM checklists WHERE subsection_id = ? AND deleted_at IS NULL ORDER BY order_index, id",
        COLUMNS
    ))?;
    let rows = stmt
        .query_map(params![subsection_id], row_to_checklist)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn by_id(conn: &Connection, id: &str) -> DomainResult<Option<Checklist>> {
    let checklist = conn
        .query_row(
            &format!("SELECT {} FROM checklists WHERE id = ?", COLUMNS),
            params![id],
            row_to_checklist,
        )
        .optional()?;
    Ok(checklist)
}

fn order_of(entries: &[OrderEntry], id: &str) -> DomainResult<u32> {
    entries
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.order)
        .ok_or_else(|| DomainError::Internal(format!("Checklist {} missing from append payload", id)))
}

/// Status items must hold exactly orders 1..M of a valid payload
fn check_status_first(current: &[Checklist], entries: &[OrderEntry]) -> DomainResult<()> {
    let status_count = current.iter().filter(|c| c.kind == ChecklistKind::Status).count() as u32;
    for entry in entries {
        let is_status = current
            .iter()
            .any(|c| c.id == entry.id && c.kind == ChecklistKind::Status);
        if is_status != (entry.order <= status_count) {
            return Err(DomainError::InvalidInput(format!(
                "checklist {} at order {} breaks status-first ordering (status items take 1..{})",
                entry.id, entry.order, status_count
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl Repository<Checklist> for ChecklistRepository {
    async fn create(&self, subsection_id: &str, fields: &NewItem) -> DomainResult<Checklist> {
        let kind = fields.kind.unwrap_or_default();
        let mut checklist = Checklist::new(subsection_id, validate_name(&fields.name)?, kind);

        let mut guard = self.conn.lock().await;
        let conn = require_mut(&mut guard)?;
        let tx = conn.transaction()?;

        let entries = append_to_group(&active(&tx, subsection_id)?, &checklist.id, kind);
        let now = now_millis();
        checklist.order_index = order_of(&entries, &checklist.id)?;
        checklist.created_at = Some(now);
        checklist.updated_at = Some(now);
        tx.execute(
            "INSERT INTO checklists (id, subsection_id, name, type, order_index, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                checklist.id,
                checklist.subsection_id,
                checklist.name,
                kind.as_str(),
                checklist.order_index,
                now,
                now
            ],
        )?;
        ordering::apply_order(&tx, CHECKLISTS, subsection_id, &entries)?;
        tx.commit()?;

        log::info!("created {} checklist {} at {}", kind, checklist.id, checklist.order_index);
        Ok(checklist)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Checklist>> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;
        by_id(conn, id)
    }

    async fn list(&self, subsection_id: &str) -> DomainResult<Vec<Checklist>> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;
        active(conn, subsection_id)
    }

    async fn update_fields(&self, id: &str, patch: &FieldPatch) -> DomainResult<Checklist> {
        if patch.is_empty() {
            return Err(DomainError::InvalidInput("nothing to update".to_string()));
        }

        let guard = self.conn.lock().await;
        let conn = require(&guard)?;

        let mut checklist =
            by_id(conn, id)?.ok_or_else(|| DomainError::NotFound(format!("Checklist {} not found", id)))?;
        checklist.apply_patch(patch)?;
        let now = now_millis();
        checklist.updated_at = Some(now);
        conn.execute(
            "UPDATE checklists SET name = ?, comment = ?, location = ?, answer = ?, updated_at = ? WHERE id = ?",
            params![checklist.name, checklist.comment, checklist.location, checklist.answer, now, id],
        )?;
        Ok(checklist)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;
        ordering::soft_delete(conn, CHECKLISTS, id)
    }
}

#[async_trait]
impl OrderedRepository<Checklist> for ChecklistRepository {
    async fn list_deleted(&self, subsection_id: &str) -> DomainResult<Vec<Checklist>> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM checklists WHERE subsection_id = ? AND deleted_at IS NOT NULL ORDER BY deleted_at DESC, id",
            COLUMNS
        ))?;
        let rows = stmt
            .query_map(params![subsection_id], row_to_checklist)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    async fn reorder(&self, subsection_id: &str, entries: &[OrderEntry]) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = require_mut(&mut guard)?;
        let tx = conn.transaction()?;

        let current = active(&tx, subsection_id)?;
        validate_payload(current.iter().map(|c| c.id.as_str()), entries)?;
        check_status_first(&current, entries)?;
        ordering::apply_order(&tx, CHECKLISTS, subsection_id, entries)?;
        tx.commit()?;

        log::info!("reordered {} checklists in {}", entries.len(), subsection_id);
        Ok(())
    }

    async fn restore(&self, id: &str) -> DomainResult<Checklist> {
        let mut guard = self.conn.lock().await;
        let conn = require_mut(&mut guard)?;
        let tx = conn.transaction()?;

        let mut checklist =
            by_id(&tx, id)?.ok_or_else(|| DomainError::NotFound(format!("Checklist {} not found", id)))?;
        if checklist.deleted_at.is_none() {
            return Err(DomainError::Conflict(format!("Checklist {} is not deleted", id)));
        }

        let entries = append_to_group(&active(&tx, &checklist.subsection_id)?, id, checklist.kind);
        let order = order_of(&entries, id)?;
        ordering::undelete_at(&tx, CHECKLISTS, id, order)?;
        ordering::apply_order(&tx, CHECKLISTS, &checklist.subsection_id, &entries)?;
        tx.commit()?;

        checklist.deleted_at = None;
        checklist.order_index = order;
        log::info!("restored {} checklist {} at {}", checklist.kind, id, order);
        Ok(checklist)
    }
}
