//! Scope Ordering Operations
//!
//! SQL shared by every orderable table: active id listing, next index,
//! bulk order application, soft delete and restore bookkeeping.

use rusqlite::{params, Connection, OptionalExtension};

use reorder_core::{validate_payload, OrderEntry};

use crate::domain::{now_millis, DomainError, DomainResult};

/// One orderable table and the column naming its sibling scope
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScopeTable {
    pub table: &'static str,
    pub parent_column: &'static str,
    pub label: &'static str,
}

pub(crate) const SECTIONS: ScopeTable = ScopeTable {
    table: "sections",
    parent_column: "company_id",
    label: "Section",
};

pub(crate) const SUBSECTIONS: ScopeTable = ScopeTable {
    table: "subsections",
    parent_column: "section_id",
    label: "Subsection",
};

pub(crate) const CHECKLISTS: ScopeTable = ScopeTable {
    table: "checklists",
    parent_column: "subsection_id",
    label: "Checklist",
};

/// Active ids of a scope in display order
pub(crate) fn active_ids(conn: &Connection, t: ScopeTable, scope_id: &str) -> DomainResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT id FROM {} WHERE {} = ? AND deleted_at IS NULL ORDER BY order_index, id",
        t.table, t.parent_column
    ))?;
    let ids = stmt
        .query_map(params![scope_id], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ids)
}

/// Next position at the end of a scope
pub(crate) fn next_order_index(conn: &Connection, t: ScopeTable, scope_id: &str) -> DomainResult<u32> {
    let next: u32 = conn.query_row(
        &format!(
            "SELECT COALESCE(MAX(order_index), 0) + 1 FROM {} WHERE {} = ? AND deleted_at IS NULL",
            t.table, t.parent_column
        ),
        params![scope_id],
        |row| row.get(0),
    )?;
    Ok(next)
}

/// Scope and deletion marker of one row
pub(crate) fn locate(conn: &Connection, t: ScopeTable, id: &str) -> DomainResult<(String, Option<i64>)> {
    conn.query_row(
        &format!("SELECT {}, deleted_at FROM {} WHERE id = ?", t.parent_column, t.table),
        params![id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()?
    .ok_or_else(|| DomainError::NotFound(format!("{} {} not found", t.label, id)))
}

/// Write explicit order indices; caller owns the transaction
pub(crate) fn apply_order(conn: &Connection, t: ScopeTable, scope_id: &str, entries: &[OrderEntry]) -> DomainResult<()> {
    let now = now_millis();
    let mut stmt = conn.prepare(&format!(
        "UPDATE {} SET order_index = ?, updated_at = ? WHERE id = ? AND {} = ?",
        t.table, t.parent_column
    ))?;
    for entry in entries {
        stmt.execute(params![entry.order, now, entry.id, scope_id])?;
    }
    Ok(())
}

/// Validate a full reorder payload against the scope and apply it atomically
pub(crate) fn reorder_scope(conn: &mut Connection, t: ScopeTable, scope_id: &str, entries: &[OrderEntry]) -> DomainResult<()> {
    let tx = conn.transaction()?;
    let active = active_ids(&tx, t, scope_id)?;
    validate_payload(active.iter().map(String::as_str), entries)?;
    apply_order(&tx, t, scope_id, entries)?;
    tx.commit()?;
    log::info!("reordered {} {} in {}", entries.len(), t.table, scope_id);
    Ok(())
}

/// Mark a row deleted; its index is kept but no longer counted
pub(crate) fn soft_delete(conn: &Connection, t: ScopeTable, id: &str) -> DomainResult<()> {
    let (_, deleted_at) = locate(conn, t, id)?;
    if deleted_at.is_some() {
        return Ok(());
    }
    let now = now_millis();
    conn.execute(
        &format!("UPDATE {} SET deleted_at = ?, updated_at = ? WHERE id = ?", t.table),
        params![now, now, id],
    )?;
    Ok(())
}

/// Clear the deletion marker and place the row at `order_index`
pub(crate) fn undelete_at(conn: &Connection, t: ScopeTable, id: &str, order_index: u32) -> DomainResult<()> {
    conn.execute(
        &format!(
            "UPDATE {} SET deleted_at = NULL, order_index = ?, updated_at = ? WHERE id = ?",
            t.table
        ),
        params![order_index, now_millis(), id],
    )?;
    Ok(())
}

/// Restore a row of a single-group scope to the end of its siblings
pub(crate) fn restore_appended(conn: &mut Connection, t: ScopeTable, id: &str) -> DomainResult<()> {
    let tx = conn.transaction()?;
    let (scope_id, deleted_at) = locate(&tx, t, id)?;
    if deleted_at.is_none() {
        return Err(DomainError::Conflict(format!("{} {} is not deleted", t.label, id)));
    }
    let order = next_order_index(&tx, t, &scope_id)?;
    undelete_at(&tx, t, id, order)?;
    tx.commit()?;
    log::info!("restored {} {} at {}", t.label, id, order);
    Ok(())
}
