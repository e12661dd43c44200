use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::schema::{ColumnType, TableSchema};

/// A validated row ready for insertion, one value per schema column
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub id: i64,
    pub values: Vec<SqlValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Text(String),
}

impl SqlValue {
    /// Untyped conversion of a JSON scalar. Arrays and objects have no
    /// column representation and yield `None`.
    pub fn from_json(value: &Value) -> Option<SqlValue> {
        match value {
            Value::Null => Some(SqlValue::Null),
            Value::Bool(b) => Some(SqlValue::Boolean(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(SqlValue::Integer(i)),
                None => n.as_f64().map(SqlValue::Real),
            },
            Value::String(s) => Some(SqlValue::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Render as a SQL literal: NULL, bare numbers, 0/1 for booleans,
    /// and single-quoted text with embedded quotes doubled
    pub fn to_literal(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Integer(i) => i.to_string(),
            SqlValue::Real(f) => f.to_string(),
            SqlValue::Boolean(b) => i64::from(*b).to_string(),
            SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }

    pub fn bind_to(&self, idx: usize, stmt: &mut rusqlite::Statement) -> rusqlite::Result<()> {
        match self {
            SqlValue::Null => stmt.raw_bind_parameter(idx, rusqlite::types::Null)?,
            SqlValue::Integer(i) => stmt.raw_bind_parameter(idx, i)?,
            SqlValue::Real(f) => stmt.raw_bind_parameter(idx, f)?,
            SqlValue::Boolean(b) => stmt.raw_bind_parameter(idx, i64::from(*b))?,
            SqlValue::Text(s) => stmt.raw_bind_parameter(idx, s.as_str())?,
        }
        Ok(())
    }
}

/// Validate one fixture object against a table schema.
///
/// Every schema column gets a value; absent optional fields become NULL.
/// Unknown fields, missing required fields, and mistyped values are errors.
pub fn parse_record(object: &Map<String, Value>, schema: &TableSchema) -> Result<ParsedRow, String> {
    if let Some(unknown) = object.keys().find(|k| schema.column(k).is_none()) {
        return Err(format!("unknown column '{}' for table {}", unknown, schema.name));
    }

    let mut values = Vec::with_capacity(object.len());
    let mut id = None;

    for col in schema.all_columns() {
        let value = match object.get(col.name) {
            None | Some(Value::Null) => SqlValue::Null,
            Some(v) => coerce(v, col.col_type)
                .ok_or_else(|| format!("invalid {:?} value for '{}': {}", col.col_type, col.name, v))?,
        };

        if value == SqlValue::Null && !col.nullable {
            return Err(format!("missing required field '{}'", col.name));
        }
        if col.is_primary_key() {
            if let SqlValue::Integer(i) = value {
                id = Some(i);
            }
        }

        values.push(value);
    }

    let id = id.ok_or_else(|| "missing integer 'id'".to_string())?;
    Ok(ParsedRow { id, values })
}

fn coerce(value: &Value, col_type: ColumnType) -> Option<SqlValue> {
    let raw = SqlValue::from_json(value)?;

    match (col_type, raw) {
        (ColumnType::Integer, v @ SqlValue::Integer(_)) => Some(v),
        (ColumnType::Text, v @ SqlValue::Text(_)) => Some(v),
        (ColumnType::Boolean, v @ SqlValue::Boolean(_)) => Some(v),
        (ColumnType::Boolean, SqlValue::Integer(i @ (0 | 1))) => Some(SqlValue::Boolean(i == 1)),
        (ColumnType::Timestamp, v @ SqlValue::Integer(_)) => Some(v),
        (ColumnType::Timestamp, SqlValue::Text(s)) => parse_timestamp(&s).map(SqlValue::Integer),
        _ => None,
    }
}

/// Date-time layouts accepted after RFC 3339, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-like date string into Unix seconds (UTC).
///
/// Accepts RFC 3339, `YYYY-MM-DD[T| ]HH:MM[:SS]`, `YYYY-MM-DD`, `YYYY-MM`,
/// and `YYYY`. Month and day may be unpadded.
pub fn parse_timestamp(s: &str) -> Option<i64> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp());
    }
    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.and_utc().timestamp());
    }

    let date = match s.split('-').count() {
        1 => s
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        2 => NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
    }?;

    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp())
}
