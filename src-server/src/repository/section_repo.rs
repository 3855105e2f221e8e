//! Section Repository
//!
//! SQLite-backed sections, ordered per company.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use reorder_core::{FieldPatch, NewItem, OrderEntry};

use crate::domain::{now_millis, validate_name, DomainError, DomainResult, Section};

use super::db::{require, require_mut, SharedConnection};
use super::ordering::{self, SECTIONS};
use super::traits::{OrderedRepository, Repository};

const COLUMNS: &str = "id, company_id, name, order_index, deleted_at, created_at, updated_at";

pub struct SectionRepository {
    conn: SharedConnection,
}

impl SectionRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn row_to_section(row: &Row) -> rusqlite::Result<Section> {
    Ok(Section {
        id: row.get(0)?,
        company_id: row.get(1)?,
        name: row.get(2)?,
        order_index: row.get(3)?,
        deleted_at: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// Sections carry a name only
fn section_name(patch: &FieldPatch) -> DomainResult<String> {
    if patch.comment.is_some() || patch.location.is_some() || patch.answer.is_some() {
        return Err(DomainError::InvalidInput("sections only have a name".to_string()));
    }
    let name = patch
        .name
        .as_deref()
        .ok_or(DomainError::InvalidInput("nothing to update".to_string()))?;
    validate_name(name)
}

#[async_trait]
impl Repository<Section> for SectionRepository {
    async fn create(&self, company_id: &str, fields: &NewItem) -> DomainResult<Section> {
        if fields.kind.is_some() {
            return Err(DomainError::InvalidInput("sections have no type".to_string()));
        }
        let mut section = Section::new(company_id, validate_name(&fields.name)?);

        let guard = self.conn.lock().await;
        let conn = require(&guard)?;

        let now = now_millis();
        section.order_index = ordering::next_order_index(conn, SECTIONS, company_id)?;
        section.created_at = Some(now);
        section.updated_at = Some(now);
        conn.execute(
            "INSERT INTO sections (id, company_id, name, order_index, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
            params![section.id, section.company_id, section.name, section.order_index, now, now],
        )?;

        log::info!("created section {} at {}", section.id, section.order_index);
        Ok(section)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Section>> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;

        let section = conn
            .query_row(
                &format!("SELECT {} FROM sections WHERE id = ?", COLUMNS),
                params![id],
                row_to_section,
            )
            .optional()?;
        Ok(section)
    }

    async fn list(&self, company_id: &str) -> DomainResult<Vec<Section>> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM sections WHERE company_id = ? AND deleted_at IS NULL ORDER BY order_index, id",
            COLUMNS
        ))?;
        let sections = stmt
            .query_map(params![company_id], row_to_section)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(sections)
    }

    async fn update_fields(&self, id: &str, patch: &FieldPatch) -> DomainResult<Section> {
        let name = section_name(patch)?;

        let guard = self.conn.lock().await;
        let conn = require(&guard)?;

        let changed = conn.execute(
            "UPDATE sections SET name = ?, updated_at = ? WHERE id = ?",
            params![name, now_millis(), id],
        )?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Section {} not found", id)));
        }
        let section = conn.query_row(
            &format!("SELECT {} FROM sections WHERE id = ?", COLUMNS),
            params![id],
            row_to_section,
        )?;
        Ok(section)
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;
        ordering::soft_delete(conn, SECTIONS, id)
    }
}

#[async_trait]
impl OrderedRepository<Section> for SectionRepository {
    async fn list_deleted(&self, company_id: &str) -> DomainResult<Vec<Section>> {
        let guard = self.conn.lock().await;
        let conn = require(&guard)?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM sections WHERE company_id = ? AND deleted_at IS NOT NULL ORDER BY deleted_at DESC, id",
            COLUMNS
        ))?;
        let sections = stmt
            .query_map(params![company_id], row_to_section)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(sections)
    }

    async fn reorder(&self, company_id: &str, entries: &[OrderEntry]) -> DomainResult<()> {
        let mut guard = self.conn.lock().await;
        let conn = require_mut(&mut guard)?;
        ordering::reorder_scope(conn, SECTIONS, company_id, entries)
    }

    async fn restore(&self, id: &str) -> DomainResult<Section> {
        let mut guard = self.conn.lock().await;
        let conn = require_mut(&mut guard)?;
        ordering::restore_appended(conn, SECTIONS, id)?;

        let section = conn.query_row(
            &format!("SELECT {} FROM sections WHERE id = ?", COLUMNS),
            params![id],
            row_to_section,
        )?;
        Ok(section)
    }
}
