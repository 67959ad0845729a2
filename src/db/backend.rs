//! Database backend trait and the uniform result type it produces.

use serde::Serialize;
use serde::ser::{SerializeMap, SerializeSeq, Serializer};

use super::DbError;
use super::value::Scalar;

/// Rows produced by one query execution, paired with their column names.
///
/// Column names come from the statement's projection, in order, and are shared
/// by every row. Every row holds exactly one value per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Scalar>>,
}

impl ResultSet {
    /// Build a result set, rejecting rows whose width differs from the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Scalar>>) -> Result<Self, DbError> {
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns.len()) {
            return Err(DbError::RowShape {
                row: index,
                expected: columns.len(),
                actual: row.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// An empty result set that still knows its columns.
    pub fn empty(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Scalar>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of a single column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Scalar> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }
}

/// Serializes as an array of objects keyed by column name.
impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            seq.serialize_element(&RowRecord { columns: &self.columns, values: row })?;
        }
        seq.end()
    }
}

struct RowRecord<'a> {
    columns: &'a [String],
    values: &'a [Scalar],
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Trait for database backends that can execute catalog queries.
pub trait DatabaseBackend {
    /// Execute `sql`, binding `args` to its positional placeholders in order.
    fn query(&self, sql: &str, args: &[String]) -> Result<ResultSet, DbError>;

    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;
}
