//! SQLite database layer for patient records.

mod schema;
mod patients;

pub use schema::*;

use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Corrupt row {record_id}: {reason}")]
    CorruptRow { record_id: String, reason: String },
}

pub type DbResult<T> = Result<T, DbError>;

/// SQLite-backed patient store.
///
/// The schema is applied on every open; it only uses `IF NOT EXISTS`, so
/// reopening an existing file is safe.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the store file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening patient database");
        Self::with_schema(Connection::open(path)?)
    }

    /// Throwaway store that lives as long as the value.
    pub fn open_in_memory() -> DbResult<Self> {
        debug!("Opening in-memory patient database");
        Self::with_schema(Connection::open_in_memory()?)
    }

    fn with_schema(conn: Connection) -> DbResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory();
        assert!(db.is_ok());
    }

    #[test]
    fn test_schema_initialized() {
        let db = Database::open_in_memory().unwrap();

        let tables: Vec<String> = db
            .conn()
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"patients".to_string()));
    }

    #[test]
    fn test_reopen_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bloodstream.db");

        Database::open(&path).unwrap();
        // Schema uses IF NOT EXISTS, so a second open must not fail
        assert!(Database::open(&path).is_ok());
    }
}
