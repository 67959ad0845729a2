//! Runs catalog commands against an owned database backend.

use crate::catalog::Command;
use crate::db::{DatabaseBackend, DbError, ResultSet};

/// Executes catalog queries against the connection it owns.
pub struct QueryExecutor {
    backend: Box<dyn DatabaseBackend>,
}

impl QueryExecutor {
    pub fn new(backend: Box<dyn DatabaseBackend>) -> Self {
        Self { backend }
    }

    /// Run `command`'s template with `args` bound positionally.
    ///
    /// Callers are expected to have validated the argument count already.
    pub fn execute(&self, command: Command, args: &[String]) -> Result<ResultSet, DbError> {
        let sql = command.template().ok_or_else(|| DbError::NoQuery {
            command: command.token().to_string(),
        })?;

        tracing::debug!(
            command = command.token(),
            args = args.len(),
            backend = self.backend.backend_name(),
            "executing query"
        );

        match self.backend.query(sql, args) {
            Ok(result) => {
                tracing::debug!(command = command.token(), rows = result.len(), "query returned");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(command = command.token(), error = %e, "query failed");
                Err(e)
            }
        }
    }
}
