//! Tagged scalar values for fixture rows.
//!
//! Every value that can appear in a fixture row is one of these variants.
//! The set mirrors the PostgreSQL scalar types the loader binds over the
//! binary protocol; integer and float widths are explicit because the
//! protocol binds exact column types.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single column value in a fixture row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureValue {
    /// SQL NULL
    Null,

    /// Boolean value
    Bool(bool),

    /// 16-bit signed integer (SMALLINT)
    SmallInt(i16),

    /// 32-bit signed integer (INTEGER)
    Int(i32),

    /// 64-bit signed integer (BIGINT)
    BigInt(i64),

    /// 32-bit floating point (REAL)
    Real(f32),

    /// 64-bit floating point (DOUBLE PRECISION)
    Double(f64),

    /// Text/string value
    Text(String),

    /// Binary data (BYTEA)
    Bytes(Vec<u8>),

    /// UUID value
    Uuid(Uuid),

    /// Date without time
    Date(NaiveDate),

    /// Time without date
    Time(NaiveTime),

    /// Timestamp without timezone
    Timestamp(NaiveDateTime),

    /// Timestamp with timezone
    TimestampTz(DateTime<Utc>),

    /// JSON value (JSON/JSONB)
    Json(serde_json::Value),
}

impl FixtureValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64, widening smaller integer variants.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::SmallInt(i) => Some(*i as i64),
            Self::Int(i) => Some(*i as i64),
            Self::BigInt(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64, widening the `Real` variant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(f) => Some(*f as f64),
            Self::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a byte slice.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get this value as a UUID.
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }

    /// Try to get this value as a timezone-aware timestamp.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::TimestampTz(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as a JSON value.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(j) => Some(j),
            _ => None,
        }
    }
}

impl fmt::Display for FixtureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::SmallInt(i) => write!(f, "{i}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::BigInt(i) => write!(f, "{i}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Date(d) => write!(f, "{d}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::Timestamp(ts) => write!(f, "{ts}"),
            Self::TimestampTz(ts) => write!(f, "{ts}"),
            Self::Json(j) => write!(f, "{j}"),
        }
    }
}

impl From<bool> for FixtureValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i16> for FixtureValue {
    fn from(value: i16) -> Self {
        Self::SmallInt(value)
    }
}

impl From<i32> for FixtureValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for FixtureValue {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

impl From<f32> for FixtureValue {
    fn from(value: f32) -> Self {
        Self::Real(value)
    }
}

impl From<f64> for FixtureValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for FixtureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FixtureValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for FixtureValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Uuid> for FixtureValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<NaiveDate> for FixtureValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveTime> for FixtureValue {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<NaiveDateTime> for FixtureValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for FixtureValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::TimestampTz(value)
    }
}

impl From<serde_json::Value> for FixtureValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl<T: Into<FixtureValue>> From<Option<T>> for FixtureValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(FixtureValue::from(true), FixtureValue::Bool(true));
        assert_eq!(FixtureValue::from(7_i16), FixtureValue::SmallInt(7));
        assert_eq!(FixtureValue::from(42_i32), FixtureValue::Int(42));
        assert_eq!(FixtureValue::from(42_i64), FixtureValue::BigInt(42));
        assert_eq!(FixtureValue::from(2.5_f64), FixtureValue::Double(2.5));
        assert_eq!(
            FixtureValue::from("alice"),
            FixtureValue::Text("alice".to_string())
        );
    }

    #[test]
    fn test_option_maps_none_to_null() {
        assert_eq!(FixtureValue::from(None::<i32>), FixtureValue::Null);
        assert_eq!(FixtureValue::from(Some(42_i32)), FixtureValue::Int(42));
        assert!(FixtureValue::from(None::<String>).is_null());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(FixtureValue::Bool(true).as_bool(), Some(true));
        assert_eq!(FixtureValue::Text("x".to_string()).as_str(), Some("x"));
        assert_eq!(FixtureValue::Double(1.5).as_f64(), Some(1.5));
        assert_eq!(FixtureValue::Bool(true).as_i64(), None);

        // Integer widening
        assert_eq!(FixtureValue::SmallInt(7).as_i64(), Some(7));
        assert_eq!(FixtureValue::Int(42).as_i64(), Some(42));
        assert_eq!(FixtureValue::BigInt(42).as_i64(), Some(42));
    }

    #[test]
    fn test_display() {
        assert_eq!(FixtureValue::Null.to_string(), "NULL");
        assert_eq!(FixtureValue::Int(42).to_string(), "42");
        assert_eq!(
            FixtureValue::Text("alice".to_string()).to_string(),
            "\"alice\""
        );
        assert_eq!(FixtureValue::Bytes(vec![1, 2, 3]).to_string(), "<3 bytes>");
        assert_eq!(
            FixtureValue::Json(serde_json::json!({"a": 1})).to_string(),
            "{\"a\":1}"
        );
    }
}
