//! Shared test utilities for executor, output and loop tests.

use std::cell::Cell;
use std::rc::Rc;

use rusqlite::Connection;

use crate::db::{DatabaseBackend, DbError, ResultSet, SqliteBackend};

/// Schema and sample rows shared with the integration tests.
pub const FIXTURE_SQL: &str = include_str!("../tests/fixtures/hyperion.sql");

/// Create an in-memory database seeded with the fixture schema and data.
pub fn seeded_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory DB");
    conn.execute_batch(FIXTURE_SQL).expect("Fixture SQL should load");
    conn
}

/// Seeded database with additional statements applied on top.
pub fn seeded_db_with(extra_sql: &str) -> Connection {
    let conn = seeded_db();
    conn.execute_batch(extra_sql).expect("Extra fixture SQL should load");
    conn
}

/// Boxed backend over the seeded database.
pub fn seeded_backend() -> Box<dyn DatabaseBackend> {
    Box::new(SqliteBackend::new(seeded_db()))
}

/// Backend that records how often it is queried and always fails.
#[derive(Default, Clone)]
pub struct CountingBackend {
    pub calls: Rc<Cell<usize>>,
}

impl DatabaseBackend for CountingBackend {
    fn query(&self, _sql: &str, _args: &[String]) -> Result<ResultSet, DbError> {
        self.calls.set(self.calls.get() + 1);
        Err(DbError::QueryFailed {
            message: "disk I/O error".to_string(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "counting"
    }
}

/// Convert string literals to owned argument tokens.
pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}
