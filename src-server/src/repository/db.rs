//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Shared connection slot; `None` until `init_db` has run
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: SharedConnection,
    pub db_path: PathBuf,
}

impl DbState {
    pub fn new(db_path: PathBuf) -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
            db_path,
        }
    }

    pub async fn is_ready(&self) -> bool {
        self.conn.lock().await.is_some()
    }
}

pub(crate) fn require(slot: &Option<Connection>) -> DomainResult<&Connection> {
    slot.as_ref()
        .ok_or(DomainError::Internal("Database not initialized".to_string()))
}

pub(crate) fn require_mut(slot: &mut Option<Connection>) -> DomainResult<&mut Connection> {
    slot.as_mut()
        .ok_or(DomainError::Internal("Database not initialized".to_string()))
}

/// Open (or create) the database at `db_path`; `:memory:` opens a private
/// in-memory database
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = if db_path == Path::new(":memory:") {
        Connection::open_in_memory()?
    } else {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| DomainError::Internal(format!("Failed to create db dir: {}", e)))?;
        }
        Connection::open(db_path)?
    };

    run_migrations(&conn)?;

    let state = DbState::new(db_path.to_path_buf());
    *state.conn.lock().await = Some(conn);
    log::info!("database ready at {}", db_path.display());
    Ok(state)
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> DomainResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS sections (
            id TEXT PRIMARY KEY,
            company_id TEXT NOT NULL,
            name TEXT NOT NULL,
            order_index INTEGER NOT NULL DEFAULT 0,
            deleted_at INTEGER,
            created_at INTEGER,
            updated_at INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_sections_company ON sections(company_id);

        CREATE TABLE IF NOT EXISTS subsections (
            id TEXT PRIMARY KEY,
            section_id TEXT NOT NULL,
            name TEXT NOT NULL,
            order_index INTEGER NOT NULL DEFAULT 0,
            deleted_at INTEGER,
            created_at INTEGER,
            updated_at INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_subsections_section ON subsections(section_id);

        CREATE TABLE IF NOT EXISTS checklists (
            id TEXT PRIMARY KEY,
            subsection_id TEXT NOT NULL,
            name TEXT NOT NULL,
            type TEXT NOT NULL DEFAULT 'status',
            comment TEXT,
            location TEXT,
            order_index INTEGER NOT NULL DEFAULT 0,
            deleted_at INTEGER,
            created_at INTEGER,
            updated_at INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_checklists_subsection ON checklists(subsection_id);",
    )?;

    // Answers arrived after the first checklist schema
    if !column_exists(conn, "checklists", "answer")? {
        conn.execute("ALTER TABLE checklists ADD COLUMN answer TEXT", [])
            .map_err(|e| DomainError::Internal(format!("Failed to add answer: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let state = init_db(Path::new(":memory:")).await.unwrap();
        let guard = state.conn.lock().await;
        let conn = require(&guard).unwrap();
        run_migrations(conn).unwrap();
        assert!(column_exists(conn, "checklists", "answer").unwrap());
    }

    #[tokio::test]
    async fn test_uninitialized_state() {
        let state = DbState::new(PathBuf::from("unused.db"));
        assert!(!state.is_ready().await);
        let guard = state.conn.lock().await;
        assert!(matches!(require(&guard), Err(DomainError::Internal(_))));
    }

    #[tokio::test]
    async fn test_file_database_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("inspect.db");
        let state = init_db(&path).await.unwrap();
        assert!(state.is_ready().await);
        assert!(path.exists());
    }
}
