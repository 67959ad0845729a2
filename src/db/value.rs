//! Scalar values returned by the database engine.
//!
//! Every cell of a [`ResultSet`](super::ResultSet) is a `Scalar`, regardless of
//! which query produced it. This keeps rendering and export schema-agnostic.

use std::fmt;

use rusqlite::types::ValueRef;
use serde::{Serialize, Serializer};

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl From<ValueRef<'_>> for Scalar {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Scalar::Null,
            ValueRef::Integer(i) => Scalar::Integer(i),
            ValueRef::Real(f) => Scalar::Real(f),
            ValueRef::Text(bytes) => Scalar::Text(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Scalar::Blob(bytes.to_vec()),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Integer(i)
    }
}

/// Null renders as an empty string; blobs render as lowercase hex.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Real(r) => write!(f, "{}", r),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Blob(b) => f.write_str(&hex::encode(b)),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_none(),
            Scalar::Integer(i) => serializer.serialize_i64(*i),
            // JSON has no representation for NaN or infinity
            Scalar::Real(r) if !r.is_finite() => serializer.serialize_none(),
            Scalar::Real(r) => serializer.serialize_f64(*r),
            Scalar::Text(s) => serializer.serialize_str(s),
            Scalar::Blob(b) => serializer.serialize_str(&hex::encode(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Scalar::Null, "")]
    #[case(Scalar::Integer(42), "42")]
    #[case(Scalar::Real(2.5), "2.5")]
    #[case(Scalar::Text("Maths".into()), "Maths")]
    #[case(Scalar::Blob(vec![0xde, 0xad]), "dead")]
    fn test_display(#[case] value: Scalar, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    #[case(Scalar::Null, "null")]
    #[case(Scalar::Integer(-3), "-3")]
    #[case(Scalar::Real(0.5), "0.5")]
    #[case(Scalar::Real(f64::NAN), "null")]
    #[case(Scalar::Text("a \"quoted\" word".into()), r#""a \"quoted\" word""#)]
    #[case(Scalar::Blob(vec![1, 2]), r#""0102""#)]
    fn test_serialize(#[case] value: Scalar, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&value).unwrap(), expected);
    }

    #[rstest]
    fn test_from_value_ref() {
        assert_eq!(Scalar::from(ValueRef::Null), Scalar::Null);
        assert_eq!(Scalar::from(ValueRef::Integer(7)), Scalar::Integer(7));
        assert_eq!(Scalar::from(ValueRef::Text(b"Art")), Scalar::Text("Art".into()));
    }
}
