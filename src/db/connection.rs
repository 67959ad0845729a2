//! Database connection management.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use super::query::run_query;
use super::{DatabaseBackend, DbError, ResultSet};

/// Open an existing SQLite database file read-only.
///
/// A missing file is an error rather than an implicitly created empty database.
pub fn open_db(path: &Path) -> Result<Connection, DbError> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| DbError::OpenFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// SQLite-backed [`DatabaseBackend`] owning a single connection.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open `path` read-only and wrap the connection.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = open_db(path)?;
        tracing::info!(path = %path.display(), "opened database");
        Ok(Self::new(conn))
    }
}

impl DatabaseBackend for SqliteBackend {
    fn query(&self, sql: &str, args: &[String]) -> Result<ResultSet, DbError> {
        run_query(&self.conn, sql, args)
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
