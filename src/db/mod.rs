//! Database connection and query utilities for SQLite.
//!
//! This module provides the database abstraction layer for the lookup tool:
//! - Connection management (read-only file, or in-memory for tests)
//! - Query execution with positional parameter binding
//! - A uniform [`ResultSet`] of [`Scalar`] cells
//!
//! # Type Decisions
//!
//! **Why a uniform `ResultSet` instead of per-query structs?**
//! The exporter writes whatever a query returns, keyed by column name. Typed
//! records per query would force the exporter to know every projection.
//!
//! **Why own the `Connection` instead of sharing a global?**
//! The connection is opened once in `main` and moved into the executor, so
//! its lifetime is the executor's and tests can substitute any backend.

mod backend;
mod connection;
mod query;
mod value;

pub use backend::{DatabaseBackend, ResultSet};
pub use connection::{SqliteBackend, open_db};
pub use query::run_query;
pub use value::Scalar;

use thiserror::Error;

/// Database error types
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("{message}")]
    QueryFailed { message: String },

    #[error("Command '{command}' does not run a query")]
    NoQuery { command: String },

    #[error("Row {row} has {actual} values but the query projects {expected} columns")]
    RowShape {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
