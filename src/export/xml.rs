//! XML serialization of result sets.
//!
//! Layout: a `root` element holding one `item` element per row; each `item`
//! holds one element per column, named after the column.

use std::error::Error;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::ExportError;
use crate::db::{ResultSet, Scalar};

const ROOT_TAG: &str = "root";
const ROW_TAG: &str = "item";

/// Serialize `result` as an indented XML document.
///
/// Column names are used verbatim as element names and must be valid XML
/// names; anything else is rejected rather than rewritten. Text values must
/// only hold characters XML 1.0 allows.
pub fn to_xml(result: &ResultSet) -> Result<Vec<u8>, ExportError> {
    if let Some(name) = result.columns().iter().find(|c| !is_valid_element_name(c)) {
        return Err(ExportError::InvalidElementName { name: name.clone() });
    }
    for row in result.rows() {
        for (column, value) in result.columns().iter().zip(row) {
            if matches!(value, Scalar::Text(text) if !text.chars().all(is_xml_char)) {
                return Err(ExportError::InvalidCharacter { column: column.clone() });
            }
        }
    }

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    write_document(&mut writer, result).map_err(|e| ExportError::Serialize {
        message: e.to_string(),
    })?;
    Ok(writer.into_inner())
}

fn write_document(writer: &mut Writer<Vec<u8>>, result: &ResultSet) -> Result<(), Box<dyn Error>> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if result.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(ROOT_TAG)))?;
        return Ok(());
    }

    writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;
    for row in result.rows() {
        writer.write_event(Event::Start(BytesStart::new(ROW_TAG)))?;
        for (column, value) in result.columns().iter().zip(row) {
            write_field(writer, column, value)?;
        }
        writer.write_event(Event::End(BytesEnd::new(ROW_TAG)))?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;
    Ok(())
}

fn write_field(writer: &mut Writer<Vec<u8>>, column: &str, value: &Scalar) -> Result<(), Box<dyn Error>> {
    if value.is_null() {
        writer.write_event(Event::Empty(BytesStart::new(column)))?;
        return Ok(());
    }

    let text = value.to_string();
    writer.write_event(Event::Start(BytesStart::new(column)))?;
    writer.write_event(Event::Text(BytesText::new(&text)))?;
    writer.write_event(Event::End(BytesEnd::new(column)))?;
    Ok(())
}

/// XML 1.0 `Char`: tab, newline and carriage return are the only controls.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Whether `name` can be used as an XML element name.
///
/// Letters, digits, `_`, `-` and `.`, starting with a letter or `_`.
/// Namespace prefixes (`:`) are not allowed.
pub fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
