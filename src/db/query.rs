//! Query execution utilities.

use rusqlite::{Connection, params_from_iter};

use super::{DbError, ResultSet, Scalar};

/// Run a query with positional parameters and collect every row.
///
/// Arguments are bound through SQLite's parameter binding, never spliced into
/// the SQL text. Column names are read from the prepared statement before
/// execution, so an empty result still carries its projection.
pub fn run_query(conn: &Connection, sql: &str, args: &[String]) -> Result<ResultSet, DbError> {
    let mut stmt = conn.prepare(sql).map_err(query_failed)?;

    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();

    let mut rows = stmt.query(params_from_iter(args.iter())).map_err(query_failed)?;
    let mut collected = Vec::new();
    while let Some(row) = rows.next().map_err(query_failed)? {
        let mut values = Vec::with_capacity(width);
        for index in 0..width {
            let value = row.get_ref(index).map_err(query_failed)?;
            values.push(Scalar::from(value));
        }
        collected.push(values);
    }

    ResultSet::new(columns, collected)
}

fn query_failed(e: rusqlite::Error) -> DbError {
    DbError::QueryFailed {
        message: e.to_string(),
    }
}
