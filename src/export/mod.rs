//! Export of result sets to structured files.
//!
//! The format is chosen solely by the filename's extension. The whole document
//! is serialized in memory before the file is created, so a failure never
//! leaves a partial file behind. Existing files are overwritten.

mod json;
mod xml;

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::db::ResultSet;

pub use json::to_json;
pub use xml::{is_valid_element_name, to_xml};

/// File format selected by a filename's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Xml,
    Unsupported,
}

impl ExportFormat {
    /// Classify `filename` by the text after its last `.`.
    ///
    /// Matching is case-sensitive and a name without a `.` is unsupported.
    pub fn from_filename(filename: &str) -> Self {
        match filename.rsplit_once('.') {
            Some((_, "json")) => ExportFormat::Json,
            Some((_, "xml")) => ExportFormat::Xml,
            _ => ExportFormat::Unsupported,
        }
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unsupported file extension for '{filename}'")]
    UnsupportedExtension { filename: String },

    #[error("Column name '{name}' is not a valid XML element name")]
    InvalidElementName { name: String },

    #[error("Value in column '{column}' contains a character XML cannot represent")]
    InvalidCharacter { column: String },

    #[error("Failed to serialize result: {message}")]
    Serialize { message: String },

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Write `result` to `filename` in the format its extension names.
///
/// Returns the format that was written.
pub fn export(result: &ResultSet, filename: &str) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_filename(filename);
    let document = match format {
        ExportFormat::Json => to_json(result)?,
        ExportFormat::Xml => to_xml(result)?,
        ExportFormat::Unsupported => {
            return Err(ExportError::UnsupportedExtension {
                filename: filename.to_string(),
            });
        }
    };

    fs::write(Path::new(filename), document).map_err(|source| ExportError::Io {
        path: filename.to_string(),
        source,
    })?;

    tracing::debug!(filename, rows = result.len(), ?format, "exported result");
    Ok(format)
}
