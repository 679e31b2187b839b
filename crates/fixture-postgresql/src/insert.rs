//! Parameterized INSERT construction for fixture rows.

use crate::error::FixtureError;
use bytes::BytesMut;
use fixture_core::{FixtureValue, Row};
use postgres_types::{to_sql_checked, IsNull, ToSql, Type};

/// Build a parameterized INSERT for one row.
///
/// The statement lists exactly the row's columns (in the row's column-name
/// order), double-quotes every identifier, and numbers placeholders `$1..$n`.
/// The returned parameters are in the same order as the placeholders.
pub(crate) fn build_insert(
    table: &str,
    row: &Row,
) -> Result<(String, Vec<Box<dyn ToSql + Sync + Send>>), FixtureError> {
    if row.is_empty() {
        return Err(FixtureError::EmptyRow {
            table: table.to_string(),
        });
    }

    let mut columns: Vec<String> = Vec::with_capacity(row.len());
    let mut params: Vec<Box<dyn ToSql + Sync + Send>> = Vec::with_capacity(row.len());
    for (column, value) in row.iter() {
        columns.push(format!("\"{column}\""));
        params.push(value_to_param(value));
    }

    let placeholders: Vec<String> = (1..=params.len()).map(|i| format!("${i}")).collect();
    let sql = format!(
        "INSERT INTO \"{table}\" ({}) VALUES ({})",
        columns.join(", "),
        placeholders.join(", ")
    );

    Ok((sql, params))
}

/// Convert a fixture value to a boxed ToSql trait object.
fn value_to_param(value: &FixtureValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        FixtureValue::Null => Box::new(SqlNull),
        FixtureValue::Bool(b) => Box::new(*b),
        FixtureValue::SmallInt(i) => Box::new(*i),
        FixtureValue::Int(i) => Box::new(*i),
        FixtureValue::BigInt(i) => Box::new(*i),
        FixtureValue::Real(f) => Box::new(*f),
        FixtureValue::Double(f) => Box::new(*f),
        FixtureValue::Text(s) => Box::new(s.clone()),
        FixtureValue::Bytes(b) => Box::new(b.clone()),
        FixtureValue::Uuid(u) => Box::new(*u),
        FixtureValue::Date(d) => Box::new(*d),
        FixtureValue::Time(t) => Box::new(*t),
        FixtureValue::Timestamp(ts) => Box::new(*ts),
        FixtureValue::TimestampTz(ts) => Box::new(*ts),
        FixtureValue::Json(j) => Box::new(j.clone()),
    }
}

/// NULL parameter that binds against any column type.
///
/// A typed `None::<T>` only passes the driver's type check for columns
/// matching `T`, but a fixture NULL must bind wherever the caller puts it.
#[derive(Debug)]
struct SqlNull;

impl ToSql for SqlNull {
    fn to_sql(
        &self,
        _ty: &Type,
        _out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        Ok(IsNull::Yes)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}
