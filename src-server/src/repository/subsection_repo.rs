//! Subsection Repository
//!
//! SQLite-backed subsections, ordered per section.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use reorder_core::{FieldPatch, NewItem, OrderEntry};

use crate::domain::{now_millis, validate_name, DomainError, DomainResult, Subsection};

use super::db::{require, require_mut, SharedConnection};
use super::ordering::{self, SUBSECTIONS};
use super::traits::{OrderedRepository, Repository};

const COLUMNS: &str = "id, section_id, name, order_index, deleted_at, created_at, updated_at";

pub struct SubsectionRepository {
    conn: SharedConnection,
}

impl SubsectionRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    fn select(conn: &rusqlite::Connection, filter: &str, scope_or_id: &str) -> DomainResult<Vec<Subsection>> {
        let mut stmt = conn.prepare(&format!("SELECT {} FROM subsections WHERE {}", COLUMNS, filter))?;
        let rows = stmt
            .query_map(params![scope_or_id], row_to_subsection)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn row_to_subsection(row: &Row) -> rusqlite::Result<Subsection> {
    Ok(Subsection {
        id: row.get(0)?,
        section_id: row.get(1)?,
        name: row.get(2)?,
        order_index: row.get(3)?,
        deleted_at: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

#[async_trait]
impl Repository<Subsection> for SubsectionRepository {
    async fn create(&self, section_id: &str, fields: &NewItem) -> DomainResult<Subsection> {
        if fields.kind.is_some() {
            return Err(DomainError::InvalidInput("subsections have no type".to_string()));
        }
        let mut subsection = Subsection::new(section_id, validate_name(&fields.name)?);

        let guard = self.conn.lock().await;
        let conn = require(&guard)?;

        let now = now_millis();
        subsection.order_index = ordering::next_order_index(conn, SUBSECTIONS, section_id)?;
        subsection.created_at = Some(now);
        subsection.updated_at = Some(now);
        conn.execute(
            "INSERT INTO subsections (id, section_id, name, order_index, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![subsection.id, subsection.section_id, subsection.name, subsection.order_index, now, now],
        )?;
        Ok(subsection)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Subsection>> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;
        let subsection = conn
            .query_row(
                &format!("SELECT {} FROM subsections WHERE id = ?", COLUMNS),
                params![id],
                row_to_subsection,
            )
            .optional()?;
        Ok(subsection)
    }

    async fn list(&self, section_id: &str) -> DomainResult<Vec<Subsection>> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;
        Self::select(
            conn,
            "section_id = ? AND deleted_at IS NULL ORDER BY order_index, id",
            section_id,
        )
    }

    async fn update_fields(&self, id: &str, patch: &FieldPatch) -> DomainResult<Subsection> {
        if patch.comment.is_some() || patch.location.is_some() || patch.answer.is_some() {
            return Err(DomainError::InvalidInput("subsections only have a name".to_string()));
        }
        let name = validate_name(
            patch
                .name
                .as_deref()
                .ok_or(DomainError::InvalidInput("nothing to update".to_string()))?,
        )?;

        let guard = self.conn.lock().await;
        let conn = require(&guard)?;

        let changed = conn.execute(
            "UPDATE subsections SET name = ?, updated_at = ? WHERE id = ?",
            params![name, now_millis(), id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Subsection {} not found", id)));
        }
        Self::select(conn, "id = ?", id)?
            .pop()
            .ok_or_else(|| DomainError::NotFound(format!("Subsection {} not found", id)))
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;
        ordering::soft_delete(conn, SUBSECTIONS, id)
    }
}

#[async_trait]
impl OrderedRepository<Subsection> for SubsectionRepository {
    async fn list_deleted(&self, section_id: &str) -> DomainResult<Vec<Subsection>> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;
        Self::select(
            conn,
            "section_id = ? AND deleted_at IS NOT NULL ORDER BY deleted_at DESC, id",
            section_id,
        )
    }

    async fn reorder(&self, section_id: &str, entries: &[OrderEntry]) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = require_mut(&mut guard)?;
        ordering::reorder_scope(conn, SUBSECTIONS, section_id, entries)
    }

    async fn restore(&self, id: &str) -> DomainResult<Subsection> {
        let mut guard = self.conn.lock().await;
        let conn = require_mut(&mut guard)?;
        ordering::restore_appended(conn, SUBSECTIONS, id)?;
        Self::select(conn, "id = ?", id)?
            .pop()
            .ok_or_else(|| DomainError::NotFound(format!("Subsection {} not found", id)))
    }
}
