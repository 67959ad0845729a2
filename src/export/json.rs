//! JSON serialization of result sets.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::ExportError;
use crate::db::ResultSet;

/// Serialize `result` as a four-space indented array of objects keyed by column name.
pub fn to_json(result: &ResultSet) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    result
        .serialize(&mut serializer)
        .map_err(|e| ExportError::Serialize {
            message: e.to_string(),
        })?;
    Ok(buf)
}
